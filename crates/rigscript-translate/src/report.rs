//! Run accounting returned to the caller after a translation pass.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// One alert annotation, keyed by one-based row number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertRecord {
    pub row: usize,
    pub translator: &'static str,
    pub alert: String,
}

/// Counts and alerts accumulated over one translation pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Rows scanned.
    pub rows: usize,
    /// Rows that received at least one canonical command.
    pub translated_rows: usize,
    /// Output emissions per translator name.
    pub outputs: BTreeMap<&'static str, usize>,
    /// Alert annotations in emission order.
    pub alerts: Vec<AlertRecord>,
    #[serde(skip)]
    written: BTreeSet<usize>,
}

impl RunReport {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    pub(crate) fn record_output(&mut self, row: usize, translator: &'static str) {
        *self.outputs.entry(translator).or_default() += 1;
        self.written.insert(row);
        self.translated_rows = self.written.len();
    }

    pub(crate) fn record_alert(&mut self, row: usize, translator: &'static str, alert: String) {
        self.alerts.push(AlertRecord {
            row: row + 1,
            translator,
            alert,
        });
    }
}
