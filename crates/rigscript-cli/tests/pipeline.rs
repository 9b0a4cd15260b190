//! End-to-end checks for the workbook pipeline.

use std::path::Path;

use rigscript_cli::pipeline::{split_workbook, translate_workbook, write_report_json};
use rigscript_ingest::{SaveOptions, Sheet};
use rigscript_model::EngineConfig;

fn cell(value: &str) -> Option<String> {
    Some(value.to_owned())
}

fn write_workbook(path: &Path, rows: Vec<Vec<Option<String>>>) {
    Sheet::from_rows(rows)
        .save(path, &SaveOptions::default())
        .unwrap();
}

#[test]
fn translate_rewrites_the_workbook_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("procedure.xlsx");
    let procfile = dir.path().join("procedures.xlsx");
    write_workbook(
        &infile,
        vec![
            vec![cell("SYS NAV/1"), cell("On CDNU1:")],
            vec![cell("SYS NAV/1"), cell("Power on CDNU1")],
            vec![cell("SYS NAV/2"), cell("Wait 5 seconds")],
        ],
    );
    write_workbook(
        &procfile,
        vec![vec![cell("ID 4512"), cell("Engine start sequence")]],
    );

    let config = EngineConfig::default();
    let outcome = translate_workbook(&infile, &procfile, &config).unwrap();
    assert_eq!(outcome.report.rows, 3);
    assert_eq!(outcome.report.translated_rows, 2);
    assert_eq!(outcome.outfile, infile);

    let translated = Sheet::open(&infile).unwrap();
    assert_eq!(translated.get(0, config.layout.context), Some("*"));
    assert_eq!(
        translated.get(1, config.layout.output),
        Some("UNIT1:RIG:SET:CDNU1:ON")
    );
    assert_eq!(translated.get(2, config.layout.output), Some("WAIT:5:S"));
}

#[test]
fn report_json_lands_where_requested() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("procedure.xlsx");
    let procfile = dir.path().join("procedures.xlsx");
    let report_path = dir.path().join("report.json");
    write_workbook(
        &infile,
        vec![vec![cell("SYS NAV/1"), cell("Wait 2 minutes")]],
    );
    write_workbook(&procfile, vec![]);

    let config = EngineConfig::default();
    let outcome = translate_workbook(&infile, &procfile, &config).unwrap();
    write_report_json(&outcome.report, &report_path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["rows"], 1);
    assert_eq!(json["translated_rows"], 1);
    assert_eq!(json["outputs"]["wait"], 1);
}

#[test]
fn split_writes_one_workbook_per_group() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("translated.xlsx");
    let outdir = dir.path().join("modules");
    write_workbook(
        &infile,
        vec![
            vec![
                cell("SYS NAV/1"),
                cell("Power on CDNU1"),
                cell("UNIT1"),
                cell("UNIT1:RIG:SET:CDNU1:ON"),
            ],
            vec![
                cell("SYS NAV/2"),
                cell("Wait 5 seconds"),
                cell("UNIT1"),
                cell("WAIT:5:S"),
            ],
        ],
    );

    let config = EngineConfig::default();
    let report = split_workbook(&infile, &outdir, &config).unwrap();
    assert_eq!(report.rows, 2);
    assert_eq!(report.file_count(), 2);

    let first = Sheet::open(outdir.join("SYS NAV@1@.xlsx")).unwrap();
    assert_eq!(first.get(0, 0), Some("Actions"));
    assert_eq!(first.get(1, 0), Some("UNIT1:RIG:SET:CDNU1:ON"));
}

#[test]
fn translate_reports_unreadable_workbooks() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.xlsx");
    let procfile = dir.path().join("procedures.xlsx");
    write_workbook(&procfile, vec![]);

    let config = EngineConfig::default();
    let error = translate_workbook(&missing, &procfile, &config).unwrap_err();
    assert!(error.to_string().contains("open"));
}
