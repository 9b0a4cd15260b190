//! ARINC simulator label commands.
//!
//! Label phrasing is too loose to translate reliably, so every emission also
//! raises a manual-review alert.

use std::sync::LazyLock;

use regex::Regex;
use rigscript_model::sentinel::ALERT_MANUAL_REVIEW;

use crate::engine::{Emit, RowCtx, Translator};

static SET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ARINC Simulator\s?:?\s?(?P<set>set)\s?(?P<item>.*)to(?P<value>.*)(?P<note> \(.*\))")
        .expect("static regex must compile")
});

pub struct ArincRule;

impl Translator for ArincRule {
    fn name(&self) -> &'static str {
        "arinc"
    }

    fn translate(&self, row: &RowCtx<'_>) -> Vec<Emit> {
        let Some(caps) = SET_RE.captures(row.text) else {
            return Vec::new();
        };
        let sep = row.notation().separator;
        let marker = &row.notation().comment_marker;
        let set = &caps["set"];
        let item = caps["item"].to_uppercase();
        let value = &caps["value"];
        let note = &caps["note"];
        vec![
            Emit::output(
                row.index,
                format!("ARINC{sep}SET{sep}{set}{sep}{item}{value}{sep}{marker}{sep}{note}"),
            )
            .with_alert(ALERT_MANUAL_REVIEW),
        ]
    }
}
