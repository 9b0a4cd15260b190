//! Wait-duration commands.
//!
//! Values come in three forms: digits, vague quantities (`a few`, `several`,
//! both read as 10) and English cardinals. Wait commands carry no unit
//! context.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::engine::{Emit, RowCtx, Translator};
use crate::wordnum;

static WAIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^wait\s+(?:for\s+)?(?:at\s+least\s+)?(?P<value>.*?)\s*(?P<unit>seconds?|minutes?)")
        .expect("static regex must compile")
});

/// Time-unit code of a wait command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitUnit {
    Seconds,
    Minutes,
    Milliseconds,
    Unknown,
}

impl WaitUnit {
    pub fn code(self) -> &'static str {
        match self {
            WaitUnit::Seconds => "S",
            WaitUnit::Minutes => "M",
            WaitUnit::Milliseconds => "MS",
            WaitUnit::Unknown => "UNKNOWN",
        }
    }
}

/// Buckets free-form unit text. Millisecond spellings are recognized for
/// completeness even though the matcher vocabulary never produces them.
pub fn normalize_wait_unit(text: &str) -> WaitUnit {
    let lower = text.to_lowercase();
    if lower.contains("second") {
        WaitUnit::Seconds
    } else if lower.contains("minute") {
        WaitUnit::Minutes
    } else if lower.contains("millisec") || lower.contains("ms") {
        WaitUnit::Milliseconds
    } else {
        WaitUnit::Unknown
    }
}

fn parse_wait_value(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    if trimmed.contains("few") || trimmed.contains("several") {
        return Some(10);
    }
    if let Ok(value) = trimmed.parse::<u64>() {
        return Some(value);
    }
    wordnum::word_to_number(trimmed).ok()
}

pub struct WaitRule;

impl Translator for WaitRule {
    fn name(&self) -> &'static str {
        "wait"
    }

    fn translate(&self, row: &RowCtx<'_>) -> Vec<Emit> {
        let Some(caps) = WAIT_RE.captures(row.text) else {
            return Vec::new();
        };
        let value_text = &caps["value"];
        let Some(value) = parse_wait_value(value_text) else {
            debug!(row = row.row_number(), value = value_text, "wait value not parseable");
            return Vec::new();
        };
        let unit = normalize_wait_unit(&caps["unit"]);
        let sep = row.notation().separator;
        vec![Emit::output(
            row.index,
            format!("WAIT{sep}{value}{sep}{}", unit.code()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::{WaitUnit, normalize_wait_unit, parse_wait_value};

    #[test]
    fn unit_buckets() {
        assert_eq!(normalize_wait_unit("seconds"), WaitUnit::Seconds);
        assert_eq!(normalize_wait_unit("Minute"), WaitUnit::Minutes);
        assert_eq!(normalize_wait_unit("millisec"), WaitUnit::Milliseconds);
        assert_eq!(normalize_wait_unit("hours"), WaitUnit::Unknown);
    }

    #[test]
    fn vague_quantities_read_as_ten() {
        assert_eq!(parse_wait_value("a few"), Some(10));
        assert_eq!(parse_wait_value("several"), Some(10));
    }

    #[test]
    fn digits_and_cardinals() {
        assert_eq!(parse_wait_value("31"), Some(31));
        assert_eq!(parse_wait_value("three"), Some(3));
        assert_eq!(parse_wait_value("a couple of"), None);
    }
}
