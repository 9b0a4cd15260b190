//! Save/open round-trips through real xlsx files.

use rigscript_ingest::{CellStyle, SaveOptions, Sheet, SheetError};

fn sample_sheet() -> Sheet {
    Sheet::from_rows(vec![
        vec![
            Some("SYS/NAV/0042".to_string()),
            Some("Power on CDNU1".to_string()),
        ],
        vec![
            Some("SYS/NAV/0042".to_string()),
            Some("Wait 5 seconds".to_string()),
            None,
            Some("WAIT:5:S".to_string()),
        ],
        vec![Some("SYS/NAV/0043".to_string())],
    ])
}

#[test]
fn round_trips_grid_through_xlsx() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("script.xlsx");

    sample_sheet()
        .save(&path, &SaveOptions::default())
        .expect("save sheet");
    let reloaded = Sheet::open(&path).expect("reopen sheet");

    assert_eq!(reloaded.row_count(), 3);
    assert_eq!(reloaded.get(0, 0), Some("SYS/NAV/0042"));
    assert_eq!(reloaded.get(0, 1), Some("Power on CDNU1"));
    assert_eq!(reloaded.get(1, 3), Some("WAIT:5:S"));
    assert_eq!(reloaded.get(1, 2), None);
    assert_eq!(reloaded.get(2, 0), Some("SYS/NAV/0043"));
    assert_eq!(reloaded.get(2, 1), None);
}

#[test]
fn styled_save_keeps_cell_text() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("styled.xlsx");

    let options = SaveOptions {
        column_styles: vec![
            (
                3,
                CellStyle {
                    font_name: Some("Calibri".to_string()),
                    font_size: Some(10.0),
                    ..CellStyle::default()
                },
            ),
            (
                4,
                CellStyle {
                    font_name: Some("Calibri".to_string()),
                    font_size: Some(10.0),
                    red_text: true,
                    ..CellStyle::default()
                },
            ),
        ],
        column_widths: vec![(0, 40.0)],
    };

    let mut sheet = sample_sheet();
    sheet.set(1, 4, "ALERT!");
    sheet.save(&path, &options).expect("save styled sheet");

    let reloaded = Sheet::open(&path).expect("reopen styled sheet");
    assert_eq!(reloaded.get(1, 3), Some("WAIT:5:S"));
    assert_eq!(reloaded.get(1, 4), Some("ALERT!"));
}

#[test]
fn open_missing_file_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = Sheet::open(dir.path().join("missing.xlsx"));
    assert!(matches!(result, Err(SheetError::Read(_))));
}
