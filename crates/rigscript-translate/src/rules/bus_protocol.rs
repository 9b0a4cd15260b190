//! Direct 1553-simulator commands: the general register set form plus the
//! enable and disable sub-forms.
//!
//! The set form is assembled from independently extracted fragments, so a
//! partly recognizable row still produces a command with sentinel fields and
//! an alert instead of nothing.

use std::sync::LazyLock;

use regex::Regex;
use rigscript_model::sentinel::{
    ALERT_CHECK_ROW, ALERT_NO_1553_CHANNEL, ALERT_NO_DISABLE_CHANNEL, ALERT_NO_ENABLE_CHANNEL,
    NO_1553_CHANNEL, NO_ADDRESS, NO_CHANNEL,
};
use tracing::debug;

use crate::engine::{Emit, RowCtx, Translator};

static CHANNEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RT\d{1,2}").expect("static regex must compile"));
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SA\d{1,3}").expect("static regex must compile"));
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[Ww]ord|[Ww]rd) (?P<num>\d{1,2})").expect("static regex must compile")
});
static WORDS_MULTI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Ww]ords \d{1,2}").expect("static regex must compile"));
static TO_CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[wW]ord|[Bb]it)? to\s(?:[Hh]ex|[Dd]ec|[Bb]in)?(?P<digits>[0-9A-F ]*)")
        .expect("static regex must compile")
});
static BASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:hex|dec|bin)").expect("static regex must compile"));
static NOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.+\)").expect("static regex must compile"));
static DISABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"1553 Simulat.*:\s[Dd]isable\s(?P<channel>.*)").expect("static regex must compile")
});
static ENABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"1553 Simulat.*:\s[Ee]nable\s(?P<channel>.*)").expect("static regex must compile")
});

fn base_code(text: &str) -> &'static str {
    match BASE_RE.find(text) {
        Some(m) => match m.as_str().to_lowercase().as_str() {
            "hex" => "H",
            "dec" => "D",
            "bin" => "B",
            _ => "",
        },
        None => "",
    }
}

pub struct BusProtocolRule;

impl Translator for BusProtocolRule {
    fn name(&self) -> &'static str {
        "bus_1553"
    }

    fn translate(&self, row: &RowCtx<'_>) -> Vec<Emit> {
        let mut emits = Vec::new();
        let text = row.text;
        let sep = row.notation().separator;
        let marker = &row.notation().comment_marker;

        let is_set = text.contains("1553 Simulator:")
            && (text.contains("set") || text.contains("Set"));
        if is_set {
            let channel = CHANNEL_RE.find(text).map(|m| m.as_str());
            let address = ADDRESS_RE.find(text).map(|m| m.as_str());
            let word = WORD_RE
                .captures(text)
                .and_then(|caps| caps.name("num"))
                .map(|m| m.as_str());
            let value = TO_CLAUSE_RE
                .captures(text)
                .and_then(|caps| caps.name("digits"))
                .map(|m| m.as_str().trim_end());
            let base = base_code(text);
            let note = NOTE_RE.find(text).map_or("", |m| m.as_str());

            match (channel, address, word, value) {
                (Some(channel), Some(address), Some(word), Some(value)) => {
                    emits.push(Emit::output(
                        row.index,
                        format!(
                            "1553{sep}SET{sep}{channel}{sep}{address}{sep}{word}{sep}{value}{sep}{base}{sep}{marker}{note}"
                        ),
                    ));
                }
                (None, Some(address), Some(word), Some(value)) => {
                    emits.push(
                        Emit::output(
                            row.index,
                            format!(
                                "1553{sep}SET{sep}{address}{sep}{word}{sep}{value}{sep}{base}{sep}{marker}{note}"
                            ),
                        )
                        .with_alert(ALERT_NO_1553_CHANNEL),
                    );
                }
                _ if WORDS_MULTI_RE.is_match(text) => {
                    debug!(row = row.row_number(), "multi-word 1553 setting is not translated");
                }
                _ => {
                    let channel = channel.unwrap_or(NO_CHANNEL);
                    let address = address.unwrap_or(NO_ADDRESS);
                    let word = word.unwrap_or("");
                    let value = value.unwrap_or("");
                    emits.push(
                        Emit::output(
                            row.index,
                            format!(
                                "1553{sep}SET{sep}{channel}{sep}{address}{sep}{word}{sep}{value}{sep}{base}{sep}{marker}{note}"
                            ),
                        )
                        .with_alert(ALERT_CHECK_ROW),
                    );
                }
            }
        }

        if let Some(caps) = DISABLE_RE.captures(text) {
            let channel = &caps["channel"];
            if channel.is_empty() {
                emits.push(
                    Emit::output(row.index, format!("1553{sep}SET{sep}{NO_1553_CHANNEL}{sep}0"))
                        .with_alert(ALERT_NO_DISABLE_CHANNEL),
                );
            } else {
                emits.push(Emit::output(
                    row.index,
                    format!("1553{sep}SET{sep}{channel}{sep}0"),
                ));
            }
        }

        if let Some(caps) = ENABLE_RE.captures(text) {
            let channel = &caps["channel"];
            if channel.is_empty() {
                emits.push(
                    Emit::output(row.index, format!("1553{sep}SET{sep}{NO_1553_CHANNEL}"))
                        .with_alert(ALERT_NO_ENABLE_CHANNEL),
                );
            } else {
                emits.push(Emit::output(row.index, format!("1553{sep}SET{sep}{channel}")));
            }
        }

        emits
    }
}
