//! Inspection shapes, key presses and procedure cross-references.

use rigscript_ingest::Sheet;
use rigscript_model::EngineConfig;
use rigscript_translate::{ProcedureIndex, TranslationEngine, resolve_contexts};

fn translate_with(texts: &[&str], procedures: &ProcedureIndex) -> Sheet {
    let config = EngineConfig::default();
    let mut sheet = Sheet::from_rows(
        texts
            .iter()
            .map(|text| vec![Some("SYS/1".to_owned()), Some((*text).to_owned())])
            .collect(),
    );
    resolve_contexts(&mut sheet, &config);
    TranslationEngine::new(config).run(&mut sheet, procedures);
    sheet
}

fn translate(texts: &[&str]) -> Sheet {
    translate_with(texts, &ProcedureIndex::default())
}

fn output(sheet: &Sheet, row: usize) -> Option<&str> {
    sheet.get(row, 3)
}

fn alert(sheet: &Sheet, row: usize) -> Option<&str> {
    sheet.get(row, 4)
}

fn procedures() -> ProcedureIndex {
    ProcedureIndex::from_sheet(&Sheet::from_rows(vec![vec![
        Some("SYS-TP-0042".to_owned()),
        Some("Engine start sequence".to_owned()),
    ]]))
}

#[test]
fn narrative_inspection_defaults_to_line_one() {
    let sheet = translate(&[
        "Inspect (1): Check LK3 label ### Inspect (1): Distance to waypoint is 12.5 NM",
    ]);
    assert_eq!(
        output(&sheet, 0),
        Some("UNIT1:INSPECT:DISPLAY:LK3:1:EQUALTO:12.5 NM:### Distance to waypoint is 12.5 NM")
    );
    assert_eq!(alert(&sheet, 0), None);
}

#[test]
fn narrative_inspection_lower_line_selector() {
    let sheet = translate(&[
        "Inspect (2): Check LK4 on the lower line ### Inspect (2): the range is 3 NM",
    ]);
    assert_eq!(
        output(&sheet, 0),
        Some("UNIT1:INSPECT:DISPLAY:LK4:2:EQUALTO:3 NM:### the range is 3 NM")
    );
}

#[test]
fn narrative_inspection_upper_wins_over_lower() {
    let sheet = translate(&[
        "Inspect (2): Check the lower then upper line LK4 value ### Inspect (2): the range is 3 NM",
    ]);
    assert_eq!(
        output(&sheet, 0),
        Some("UNIT1:INSPECT:DISPLAY:LK4:1:EQUALTO:3 NM:### the range is 3 NM")
    );
}

#[test]
fn assignment_inspection_raises_range_alert() {
    let sheet = translate(&["Inspect(3):  LK4 - BARO ### set:BARO=29.92"]);
    assert_eq!(
        output(&sheet, 0),
        Some("UNIT1:INSPECT:DISPLAY:LK4:BARO:EQUALTO:29.92:### BARO=29.92")
    );
    assert_eq!(alert(&sheet, 0), Some("ALERT! - Check Value Range"));
}

#[test]
fn assignment_shape_overrides_narrative_shape() {
    let sheet = translate(&["Inspect(1): LK2 - status ### Inspect(1): STATUS=OK is shown"]);
    assert_eq!(
        output(&sheet, 0),
        Some("UNIT1:INSPECT:DISPLAY:LK2:STATUS:EQUALTO:OK is shown:###  STATUS=OK is shown")
    );
    assert_eq!(alert(&sheet, 0), Some("ALERT! - Check Value Range"));
}

#[test]
fn key_press_with_trailing_text() {
    let sheet = translate(&["Press the ENT key"]);
    assert_eq!(output(&sheet, 0), Some("UNIT1:ENT:###  key"));
}

#[test]
fn arrow_key_needs_no_word_boundary() {
    let sheet = translate(&["Press --> repeatedly"]);
    assert_eq!(output(&sheet, 0), Some("UNIT1:-->:###  repeatedly"));
}

#[test]
fn mark_fix_collapses_to_one_token() {
    let sheet = translate(&["Press MARK / FIX"]);
    assert_eq!(output(&sheet, 0), Some("UNIT1:MARKFIX:### "));
}

#[test]
fn key_tokens_do_not_fire_inside_hex_payloads() {
    let sheet = translate(&["Set value to hex DF3A"]);
    assert_eq!(output(&sheet, 0), None);
    assert_eq!(alert(&sheet, 0), None);
}

#[test]
fn key_row_without_context_raises_unit_alert() {
    let sheet = translate(&["Actions: Press ENT"]);
    assert_eq!(output(&sheet, 0), None);
    assert_eq!(alert(&sheet, 0), Some("ALERT! UNIT NOT DETERMINED"));
}

#[test]
fn procedure_reference_resolves_name() {
    let sheet = translate_with(
        &["On CDNU2:", "Repeat the steps as in Section ID 0042"],
        &procedures(),
    );
    assert_eq!(output(&sheet, 1), Some("UNIT2:PROC:Engine start sequence"));
}

#[test]
fn procedure_reference_without_match_keeps_sentinel() {
    let sheet = translate_with(&["Repeat as in Section ID 9999"], &procedures());
    assert_eq!(
        output(&sheet, 0),
        Some("UNIT1:PROC:ALERT! NO MATCH FOUND IN PROCEDURE FILE")
    );
}
