//! Control-panel key presses and procedure cross-references.
//!
//! Runs last in the dispatch order and skips inspection rows outright, so
//! key tokens quoted inside display text never clobber a richer translation.

use std::sync::LazyLock;

use regex::Regex;
use rigscript_model::sentinel::ALERT_UNIT_NOT_DETERMINED;
use tracing::debug;

use crate::engine::{Emit, RowCtx, Translator};

// Word boundaries keep short tokens such as DF and ENT from firing inside
// hex payloads or longer identifiers. The arrow spellings have no word
// characters, so they stand outside the bounded group.
static KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:LK[0-9]|ALRT|COM|DATA|FPLN|NAV|SNSR|STR|TEST|WPT|FWD|BAK|BCK|CLR|ENT|BRT|DIM|LL_GRID|HDR|QUIT|PERF|HUMS|DF|IFF|IDM|TAC|BMN|GODIRECT|ON/OFF|LBCK|LFWD|LCLR|LENT|LLK[1-5]|LRK[1-5])\b|-->|<--|<<-|(?P<markfix>MARK\s*/*\s*FIX)",
    )
    .expect("static regex must compile")
});
static PROC_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[Aa]s in [Ss]ection|[Aa]s [Ss]ection|[Aa]s in ID")
        .expect("static regex must compile")
});
static ID_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[iI][Dd]").expect("static regex must compile"));
static ID_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Ii][Dd].(?P<num>\d{1,7})").expect("static regex must compile"));

pub struct KeyRule;

impl Translator for KeyRule {
    fn name(&self) -> &'static str {
        "keys"
    }

    fn translate(&self, row: &RowCtx<'_>) -> Vec<Emit> {
        // Inspection rows quote labels like LK3 as display content.
        if row.text.contains("Inspect") {
            return Vec::new();
        }
        let sep = row.notation().separator;

        if PROC_PHRASE_RE.is_match(row.text) && ID_MENTION_RE.is_match(row.text) {
            let Some(context) = row.unit_label() else {
                return vec![Emit::alert(row.index, ALERT_UNIT_NOT_DETERMINED)];
            };
            let Some(caps) = ID_NUMBER_RE.captures(row.text) else {
                debug!(row = row.row_number(), "procedure reference without a numeric id");
                return Vec::new();
            };
            let name = row.procedures.lookup(&caps["num"]);
            return vec![Emit::output(row.index, format!("{context}{sep}PROC{sep}{name}"))];
        }

        if let Some(caps) = KEY_RE.captures(row.text) {
            let Some(context) = row.unit_label() else {
                return vec![Emit::alert(row.index, ALERT_UNIT_NOT_DETERMINED)];
            };
            let Some(matched) = caps.get(0) else {
                return Vec::new();
            };
            let token = if caps.name("markfix").is_some() {
                "MARKFIX"
            } else {
                matched.as_str()
            };
            let marker = &row.notation().comment_marker;
            let rest = &row.text[matched.end()..];
            return vec![Emit::output(
                row.index,
                format!("{context}{sep}{token}{sep}{marker}{rest}"),
            )];
        }

        Vec::new()
    }
}
