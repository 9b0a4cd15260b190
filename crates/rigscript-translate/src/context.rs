//! Context resolver: the forward pass that assigns a unit context to every
//! row before any translation rule runs.

use std::sync::LazyLock;

use regex::Regex;
use rigscript_ingest::Sheet;
use rigscript_model::{ContextCell, EngineConfig, UnitContext};
use tracing::debug;

static UNITS_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^on\sboth\s(?:CDNU|unit).:").expect("static regex must compile")
});
static UNIT1_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^on\s(?:CDNU|unit).?1.").expect("static regex must compile")
});
static UNIT2_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^on\s(?:CDNU|unit).?2.").expect("static regex must compile")
});
static SECTION_RESET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Actions").expect("static regex must compile"));

#[derive(Clone, Copy)]
enum RowKind {
    Declaration(UnitContext),
    SectionReset,
    Ordinary,
}

fn classify(text: &str) -> RowKind {
    // Both-units first: the single-unit patterns would also match its prefix.
    if UNITS_DECL_RE.is_match(text) {
        RowKind::Declaration(UnitContext::Units)
    } else if UNIT1_DECL_RE.is_match(text) {
        RowKind::Declaration(UnitContext::Unit1)
    } else if UNIT2_DECL_RE.is_match(text) {
        RowKind::Declaration(UnitContext::Unit2)
    } else if SECTION_RESET_RE.is_match(text) {
        RowKind::SectionReset
    } else {
        RowKind::Ordinary
    }
}

/// Walks the sheet once, top to bottom. Declaration rows update the carried
/// context and are marked with [`ContextCell::Declaration`]; section headings
/// reset the carry to `UNIT1` and stay unmarked; every other row receives the
/// carried label.
///
/// The carry starts at `UNIT1`, so rows above the first declaration are
/// attributed to unit 1.
pub fn resolve_contexts(sheet: &mut Sheet, config: &EngineConfig) {
    let layout = config.layout;
    let mut carried = UnitContext::Unit1;
    for index in 0..sheet.row_count() {
        let kind = classify(sheet.get(index, layout.text).unwrap_or(""));
        match kind {
            RowKind::Declaration(unit) => {
                carried = unit;
                sheet.set(index, layout.context, ContextCell::Declaration.as_str());
                debug!(row = index + 1, context = %unit, "context declaration");
            }
            RowKind::SectionReset => {
                carried = UnitContext::Unit1;
                debug!(row = index + 1, "section heading resets context");
            }
            RowKind::Ordinary => {
                sheet.set(index, layout.context, carried.as_str());
            }
        }
    }
}
