//! Translator dispatch over a context-resolved sheet.

use rigscript_ingest::Sheet;
use rigscript_model::{ContextCell, EngineConfig, Notation, UnitContext};
use tracing::{debug, info};

use crate::procedures::ProcedureIndex;
use crate::report::RunReport;
use crate::rules;

/// One translation candidate addressed to an absolute row.
///
/// Lookahead translators may address rows beyond the one they were invoked
/// on; everything else addresses its own row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emit {
    pub row: usize,
    pub output: Option<String>,
    pub alert: Option<String>,
}

impl Emit {
    pub fn output(row: usize, output: impl Into<String>) -> Self {
        Self {
            row,
            output: Some(output.into()),
            alert: None,
        }
    }

    pub fn alert(row: usize, alert: impl Into<String>) -> Self {
        Self {
            row,
            output: None,
            alert: Some(alert.into()),
        }
    }

    pub fn with_alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }
}

/// Everything a translator may look at while handling one row.
pub struct RowCtx<'a> {
    pub index: usize,
    pub text: &'a str,
    pub sheet: &'a Sheet,
    pub config: &'a EngineConfig,
    pub procedures: &'a ProcedureIndex,
}

impl RowCtx<'_> {
    /// One-based row number for logs.
    pub fn row_number(&self) -> usize {
        self.index + 1
    }

    pub fn notation(&self) -> &Notation {
        &self.config.notation
    }

    /// The resolved context slot of this row, if any.
    pub fn context_cell(&self) -> Option<ContextCell> {
        self.sheet
            .get(self.index, self.config.layout.context)
            .and_then(ContextCell::parse)
    }

    /// The unit label carried by this row. `None` on declaration rows and on
    /// rows the resolver left unlabeled.
    pub fn unit_label(&self) -> Option<&'static str> {
        self.context_cell()
            .and_then(|cell| cell.unit())
            .map(UnitContext::as_str)
    }

    /// Instruction text of an arbitrary row, for lookahead scans.
    pub fn text_at(&self, index: usize) -> Option<&str> {
        self.sheet.get(index, self.config.layout.text)
    }
}

/// One pattern family of the rule engine.
///
/// Translators never fail: unmatched text produces no emissions and
/// malformed sub-patterns are logged at debug level and skipped.
pub trait Translator {
    /// Stable name used in logs and the run report.
    fn name(&self) -> &'static str;

    /// Emissions for one row.
    fn translate(&self, row: &RowCtx<'_>) -> Vec<Emit>;
}

/// Per-row progress callback for interactive front ends.
pub trait RowListener {
    fn on_row(&mut self, index: usize, total: usize);
}

/// Runs the fixed translator sequence over every row of a sheet.
///
/// Rows matched by more than one translator keep the last output written;
/// the dispatch order in [`rules::default_translators`] is therefore part of
/// the output contract.
pub struct TranslationEngine {
    config: EngineConfig,
    translators: Vec<Box<dyn Translator>>,
}

impl TranslationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            translators: rules::default_translators(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Translates every row in document order. [`crate::resolve_contexts`]
    /// must have run on the sheet first.
    pub fn run(&self, sheet: &mut Sheet, procedures: &ProcedureIndex) -> RunReport {
        self.run_with_listener(sheet, procedures, None)
    }

    pub fn run_with_listener(
        &self,
        sheet: &mut Sheet,
        procedures: &ProcedureIndex,
        mut listener: Option<&mut dyn RowListener>,
    ) -> RunReport {
        let total = sheet.row_count();
        let mut report = RunReport::new(total);
        for index in 0..total {
            if let Some(listener) = &mut listener {
                listener.on_row(index, total);
            }
            let Some(text) = sheet.get(index, self.config.layout.text).map(str::to_owned) else {
                continue;
            };
            for translator in &self.translators {
                let row = RowCtx {
                    index,
                    text: &text,
                    sheet: &*sheet,
                    config: &self.config,
                    procedures,
                };
                for emit in translator.translate(&row) {
                    self.apply(sheet, translator.name(), emit, &mut report);
                }
            }
        }
        info!(
            rows = total,
            translated = report.translated_rows,
            alerts = report.alert_count(),
            "translation pass complete"
        );
        report
    }

    fn apply(
        &self,
        sheet: &mut Sheet,
        translator: &'static str,
        emit: Emit,
        report: &mut RunReport,
    ) {
        let Emit { row, output, alert } = emit;
        if let Some(output) = output {
            debug!(row = row + 1, translator, output = %output, "translated");
            sheet.set(row, self.config.layout.output, output);
            report.record_output(row, translator);
        }
        if let Some(alert) = alert {
            debug!(row = row + 1, translator, alert = %alert, "alert raised");
            sheet.set(row, self.config.layout.alert, alert.clone());
            report.record_alert(row, translator, alert);
        }
    }
}
