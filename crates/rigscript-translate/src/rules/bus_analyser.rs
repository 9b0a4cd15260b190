//! Bus-analyser commands: the single-row set form plus the two block forms
//! whose word lines are consumed by lookahead.
//!
//! Block emissions land in the rows they were read from, not in the header
//! row. A block ends at the first row that matches no body shape.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::engine::{Emit, RowCtx, Translator};

static SIMPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Bus Analyser:\sset\s(?P<channel>[A-Z]{1,2}[0-9]{1,2})\s(?P<address>[A-Z]{1,2}[0-9]{1,2})\sword\s(?P<word>\d{1,3})\sto\s(?P<value>[0-9A-F]{1,8}#?[0-9A-F]{1,8})(?P<trailing>.*)",
    )
    .expect("static regex must compile")
});
static WORDS_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Bus Analyser: Set (?P<channel>\w{3,5})\s(?P<address>\w{3,5}) words as follows:")
        .expect("static regex must compile")
});
static TRANSMIT_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Bus Analyser: Transmit the following data for (?P<channel>\w{3,5})\s(?P<address>\w{3,5})")
        .expect("static regex must compile")
});
static WORD_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Word (?P<word>\d{1,2}): (?:\d{1,2})#(?P<value>[0-9A-F]{1,4}) (?P<trailing>.*)")
        .expect("static regex must compile")
});
static RAMP_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Word (?P<word>\d{1,2}): Ramp up from (?:\d{1,2})#(?P<from>[0-9A-F]{1,4}) to (?:\d{1,2})#(?P<to>[0-9A-F]{1,4}) in steps of (?:\d{1,2})#(?P<step>\d{1,2})(?P<trailing>.*)",
    )
    .expect("static regex must compile")
});

fn word_line_command(
    row: &RowCtx<'_>,
    channel: &str,
    address: &str,
    caps: &Captures<'_>,
) -> String {
    let sep = row.notation().separator;
    let marker = &row.notation().comment_marker;
    let word = &caps["word"];
    let value = &caps["value"];
    let trailing = &caps["trailing"];
    format!("1553{sep}SET{sep}{channel}{sep}{address}{sep}{word}{sep}{value}{sep}{marker}{trailing}")
}

/// Expands a ramp line into one command per step value. The end value is
/// exclusive. Returns `None` for a zero step or an empty range.
fn ramp_commands(
    row: &RowCtx<'_>,
    cursor: usize,
    channel: &str,
    address: &str,
    caps: &Captures<'_>,
) -> Option<String> {
    let sep = row.notation().separator;
    let marker = &row.notation().comment_marker;
    let word = &caps["word"];
    let trailing = &caps["trailing"];
    // Bounds are hexadecimal, the step is decimal. The width patterns keep
    // every parse in range.
    let from = u64::from_str_radix(&caps["from"], 16).ok()?;
    let to = u64::from_str_radix(&caps["to"], 16).ok()?;
    let step = caps["step"].parse::<u64>().ok()?;
    if step == 0 {
        debug!(row = cursor + 1, "ramp step is zero");
        return None;
    }
    let mut commands = Vec::new();
    let mut value = from;
    while value < to {
        commands.push(format!(
            "1553{sep}SET{sep}{channel}{sep}{address}{sep}{word}{sep}{value}{sep}{marker}{trailing}"
        ));
        value += step;
    }
    if commands.is_empty() {
        debug!(row = cursor + 1, from, to, "ramp range is empty");
        return None;
    }
    Some(commands.join("\n"))
}

/// Consumes `Word n: ...` lines below a `words as follows` header.
fn scan_word_block(row: &RowCtx<'_>, channel: &str, address: &str) -> Vec<Emit> {
    let mut emits = Vec::new();
    let mut cursor = row.index + 1;
    while let Some(text) = row.text_at(cursor) {
        let Some(caps) = WORD_LINE_RE.captures(text) else {
            break;
        };
        emits.push(Emit::output(cursor, word_line_command(row, channel, address, &caps)));
        cursor += 1;
    }
    emits
}

/// Consumes word and ramp lines below a `Transmit the following data` header.
fn scan_transmit_block(row: &RowCtx<'_>, channel: &str, address: &str) -> Vec<Emit> {
    let mut emits = Vec::new();
    let mut cursor = row.index + 1;
    while let Some(text) = row.text_at(cursor) {
        if let Some(caps) = WORD_LINE_RE.captures(text) {
            emits.push(Emit::output(cursor, word_line_command(row, channel, address, &caps)));
        } else if let Some(caps) = RAMP_LINE_RE.captures(text) {
            if let Some(commands) = ramp_commands(row, cursor, channel, address, &caps) {
                emits.push(Emit::output(cursor, commands));
            }
        } else {
            break;
        }
        cursor += 1;
    }
    emits
}

pub struct BusAnalyserRule;

impl Translator for BusAnalyserRule {
    fn name(&self) -> &'static str {
        "bus_analyser"
    }

    fn translate(&self, row: &RowCtx<'_>) -> Vec<Emit> {
        let mut emits = Vec::new();
        if let Some(caps) = SIMPLE_RE.captures(row.text) {
            if let Some(context) = row.unit_label() {
                let sep = row.notation().separator;
                let marker = &row.notation().comment_marker;
                let channel = &caps["channel"];
                let address = &caps["address"];
                let word = &caps["word"];
                let value = &caps["value"];
                let trailing = &caps["trailing"];
                emits.push(Emit::output(
                    row.index,
                    format!(
                        "{context}{sep}SET{sep}{channel}{sep}{address}{sep}{word}{sep}{value}{sep}{marker}{trailing}"
                    ),
                ));
            } else {
                debug!(row = row.row_number(), "bus analyser set on a row without context");
            }
        }
        if let Some(caps) = WORDS_HEADER_RE.captures(row.text) {
            emits.extend(scan_word_block(row, &caps["channel"], &caps["address"]));
        }
        if let Some(caps) = TRANSMIT_HEADER_RE.captures(row.text) {
            emits.extend(scan_transmit_block(row, &caps["channel"], &caps["address"]));
        }
        emits
    }
}
