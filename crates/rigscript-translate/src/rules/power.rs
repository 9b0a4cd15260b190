//! Power-state commands, for one unit or for all units at once.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::engine::{Emit, RowCtx, Translator};

static SINGLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)power\s(?P<state>on|off)\s(?P<unit>(?:CDNU|unit)[12])")
        .expect("static regex must compile")
});
static PLURAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)power\s(?P<state>on|off|down)\s(?:both|the)?\s?(?:CDNU|unit)'?s")
        .expect("static regex must compile")
});

pub struct PowerRule;

impl Translator for PowerRule {
    fn name(&self) -> &'static str {
        "power"
    }

    fn translate(&self, row: &RowCtx<'_>) -> Vec<Emit> {
        let mut emits = Vec::new();
        if !SINGLE_RE.is_match(row.text) && !PLURAL_RE.is_match(row.text) {
            return emits;
        }
        let Some(context) = row.unit_label() else {
            debug!(row = row.row_number(), "power command on a row without context");
            return emits;
        };
        let sep = row.notation().separator;
        if let Some(caps) = SINGLE_RE.captures(row.text) {
            // Unit name goes out verbatim; the mating harness accepts either
            // vocabulary.
            let unit = &caps["unit"];
            let state = caps["state"].to_uppercase();
            emits.push(Emit::output(
                row.index,
                format!("{context}{sep}RIG{sep}SET{sep}{unit}{sep}{state}"),
            ));
        }
        if let Some(caps) = PLURAL_RE.captures(row.text) {
            let mut state = caps["state"].to_uppercase();
            if state == "DOWN" {
                state = "OFF".to_owned();
            }
            emits.push(Emit::output(
                row.index,
                format!("{context}{sep}RIG{sep}SET{sep}UNITS{sep}{state}"),
            ));
        }
        emits
    }
}
