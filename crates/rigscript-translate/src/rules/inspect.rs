//! Display-inspection assertions, in their narrative and assignment shapes.
//!
//! Both shapes may match the same row; the assignment shape runs second and
//! its output wins under last-write-wins.

use std::sync::LazyLock;

use regex::Regex;
use rigscript_model::sentinel::ALERT_CHECK_VALUE_RANGE;
use tracing::debug;

use crate::engine::{Emit, RowCtx, Translator};

static NARRATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Inspect\s?\(\d{1,3}\)\s?:.*(?P<lk>LK[0-9])\s.*###\s?Inspect\s?\(\d{1,3}\)\s?:\s(?P<description>.*)",
    )
    .expect("static regex must compile")
});
static IS_CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<subject>.*)\sis\s(?P<expected>.*)").expect("static regex must compile")
});
static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Inspect\(\d{1,3}\):\s+(?P<lk>LK[0-9]) - .*###.*:(?P<expr>(?P<key>.*)=(?P<expected>.*))",
    )
    .expect("static regex must compile")
});

/// Picks the display line an inspection refers to. Line 1 is the default;
/// `lower` selects line 2 and `upper` overrides back to line 1 when both
/// words appear.
fn display_line(text: &str) -> u8 {
    let lower = text.to_lowercase();
    let mut line = 1;
    if lower.contains(" lower ") {
        line = 2;
    }
    if lower.contains(" upper ") {
        line = 1;
    }
    line
}

pub struct InspectRule;

impl Translator for InspectRule {
    fn name(&self) -> &'static str {
        "inspect"
    }

    fn translate(&self, row: &RowCtx<'_>) -> Vec<Emit> {
        let mut emits = Vec::new();
        let sep = row.notation().separator;
        let marker = &row.notation().comment_marker;

        if let Some(caps) = NARRATIVE_RE.captures(row.text) {
            let Some(context) = row.unit_label() else {
                debug!(row = row.row_number(), "inspection on a row without context");
                return emits;
            };
            let lk = &caps["lk"];
            let description = &caps["description"];
            if let Some(clause) = IS_CLAUSE_RE.captures(description) {
                let expected = &clause["expected"];
                let line = display_line(row.text);
                let keyword = clause["subject"].split_whitespace().last().map(str::to_owned);
                debug!(
                    row = row.row_number(),
                    lk,
                    line,
                    keyword = keyword.as_deref().unwrap_or(""),
                    "narrative inspection"
                );
                emits.push(Emit::output(
                    row.index,
                    format!(
                        "{context}{sep}INSPECT{sep}DISPLAY{sep}{lk}{sep}{line}{sep}EQUALTO{sep}{expected}{sep}{marker}{description}"
                    ),
                ));
            } else {
                debug!(row = row.row_number(), "inspection description has no `is` clause");
            }
        }

        if let Some(caps) = ASSIGNMENT_RE.captures(row.text) {
            let Some(context) = row.unit_label() else {
                debug!(row = row.row_number(), "inspection on a row without context");
                return emits;
            };
            let lk = &caps["lk"];
            let key = caps["key"].trim();
            let expected = caps["expected"].trim();
            let expr = &caps["expr"];
            emits.push(
                Emit::output(
                    row.index,
                    format!(
                        "{context}{sep}INSPECT{sep}DISPLAY{sep}{lk}{sep}{key}{sep}EQUALTO{sep}{expected}{sep}{marker}{expr}"
                    ),
                )
                .with_alert(ALERT_CHECK_VALUE_RANGE),
            );
        }

        emits
    }
}
