//! Test-rig switch commands: `Test Rig: Set <switch> to <state>`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::engine::{Emit, RowCtx, Translator};

static SET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Test Rig:\s[Ss]et(?: the)?\s(?P<switch>.*) to\s(?P<state>.*)")
        .expect("static regex must compile")
});

pub struct TestRigRule;

impl Translator for TestRigRule {
    fn name(&self) -> &'static str {
        "test_rig"
    }

    fn translate(&self, row: &RowCtx<'_>) -> Vec<Emit> {
        let Some(caps) = SET_RE.captures(row.text) else {
            return Vec::new();
        };
        let Some(context) = row.unit_label() else {
            debug!(row = row.row_number(), "test rig command on a row without context");
            return Vec::new();
        };
        let sep = row.notation().separator;
        let switch = &caps["switch"];
        let state = &caps["state"];
        vec![Emit::output(
            row.index,
            format!("{context}{sep}RIG{sep}SET{sep}{switch}{sep}{state}"),
        )]
    }
}
