//! Partitioner behavior against real workbooks on disk.

use rigscript_ingest::Sheet;
use rigscript_model::{EngineConfig, ModelError};
use rigscript_split::{SplitError, split_sheet};

fn sheet(rows: &[(&str, &str)]) -> Sheet {
    Sheet::from_rows(
        rows.iter()
            .map(|(id, command)| {
                vec![
                    Some((*id).to_owned()),
                    Some("instruction".to_owned()),
                    Some("UNIT1".to_owned()),
                    Some((*command).to_owned()),
                ]
            })
            .collect(),
    )
}

#[test]
fn consecutive_identifier_runs_become_files() {
    let source = sheet(&[
        ("NAV/1", "cmd1"),
        ("NAV/1", "cmd2"),
        ("NAV/1", "cmd3"),
        ("NAV/2", "cmd4"),
        ("NAV/2", "cmd5"),
        ("COM/7", "cmd6"),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let report = split_sheet(&source, &EngineConfig::default(), dir.path()).unwrap();

    assert_eq!(report.rows, 6);
    assert_eq!(report.file_count(), 3);
    let names: Vec<&str> = report.files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, vec!["NAV@1@.xlsx", "NAV@2@.xlsx", "COM@7@.xlsx"]);
    let row_counts: Vec<usize> = report.files.iter().map(|f| f.rows).collect();
    assert_eq!(row_counts, vec![3, 2, 1]);
}

#[test]
fn artifact_has_header_then_every_command() {
    let source = sheet(&[("NAV/1", "cmd1"), ("NAV/1", "cmd2"), ("NAV/1", "cmd3")]);
    let dir = tempfile::tempdir().unwrap();
    split_sheet(&source, &EngineConfig::default(), dir.path()).unwrap();

    let artifact = Sheet::open(dir.path().join("NAV@1@.xlsx")).unwrap();
    assert_eq!(artifact.row_count(), 4);
    assert_eq!(artifact.get(0, 0), Some("Actions"));
    assert_eq!(artifact.get(1, 0), Some("cmd1"));
    assert_eq!(artifact.get(2, 0), Some("cmd2"));
    assert_eq!(artifact.get(3, 0), Some("cmd3"));
}

#[test]
fn untranslated_rows_keep_their_place() {
    let source = Sheet::from_rows(vec![
        vec![Some("NAV/1".into()), Some("step".into()), None, Some("a".into())],
        vec![Some("NAV/1".into()), Some("narrative only".into()), None, None],
        vec![Some("NAV/1".into()), Some("step".into()), None, Some("c".into())],
    ]);
    let dir = tempfile::tempdir().unwrap();
    split_sheet(&source, &EngineConfig::default(), dir.path()).unwrap();

    let artifact = Sheet::open(dir.path().join("NAV@1@.xlsx")).unwrap();
    assert_eq!(artifact.row_count(), 4);
    assert_eq!(artifact.get(2, 0), None);
    assert_eq!(artifact.get(3, 0), Some("c"));
}

#[test]
fn group_file_takes_module_of_its_last_row() {
    // Boundary detection only watches the trailing id, so a module change
    // with the same id stays in one group and the last module names it.
    let source = sheet(&[("NAV/1", "cmd1"), ("NAV Extra/1", "cmd2"), ("NAV/2", "cmd3")]);
    let dir = tempfile::tempdir().unwrap();
    let report = split_sheet(&source, &EngineConfig::default(), dir.path()).unwrap();

    assert_eq!(report.file_count(), 2);
    assert_eq!(report.files[0].file_name, "NAV Extra@1@.xlsx");
    assert_eq!(report.files[0].rows, 2);
    assert_eq!(report.files[1].file_name, "NAV@2@.xlsx");
}

#[test]
fn module_path_slashes_flatten_to_underscores() {
    let source = sheet(&[("4 Nav/Sub/12", "cmd")]);
    let dir = tempfile::tempdir().unwrap();
    let report = split_sheet(&source, &EngineConfig::default(), dir.path()).unwrap();

    assert_eq!(report.files[0].file_name, "4 Nav_Sub@12@.xlsx");
    assert_eq!(report.files[0].module, "4 Nav/Sub");
    assert!(dir.path().join("4 Nav_Sub@12@.xlsx").exists());
}

#[test]
fn export_prefix_aborts_the_run() {
    let source = sheet(&[("NAV/1", "cmd1"), ("ID : NAV/2", "cmd2")]);
    let dir = tempfile::tempdir().unwrap();
    let err = split_sheet(&source, &EngineConfig::default(), dir.path()).unwrap_err();
    assert!(matches!(
        err,
        SplitError::Identifier {
            row: 2,
            source: ModelError::IdentifierPrefix(_),
        }
    ));
}

#[test]
fn identifier_without_module_path_aborts_the_run() {
    let source = sheet(&[("NAV1", "cmd1")]);
    let dir = tempfile::tempdir().unwrap();
    let err = split_sheet(&source, &EngineConfig::default(), dir.path()).unwrap_err();
    assert!(matches!(
        err,
        SplitError::Identifier {
            row: 1,
            source: ModelError::MissingModulePath(_),
        }
    ));
}
