//! Workbook-level orchestration shared by the CLI commands.
//!
//! The translate pipeline follows these stages in order:
//! 1. **Open**: Read the procedure sheet and the procedures workbook
//! 2. **Context pass**: Resolve unit-context labels for every row
//! 3. **Translate pass**: Run the rule chain over the labelled rows
//! 4. **Save**: Write commands, alerts, and styling back in place
//!
//! The split pipeline reads an already-translated sheet and partitions it
//! into per-module workbooks.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rigscript_ingest::{CellStyle, SaveOptions, Sheet};
use rigscript_model::EngineConfig;
use rigscript_split::{SplitReport, split_sheet};
use rigscript_translate::{ProcedureIndex, RunReport, TranslationEngine, resolve_contexts};

// ============================================================================
// Translate
// ============================================================================

/// Result of a translate run.
#[derive(Debug)]
pub struct TranslateOutcome {
    /// Row and alert counts gathered during the run.
    pub report: RunReport,
    /// The workbook that was rewritten in place.
    pub outfile: PathBuf,
}

/// Translate a procedure workbook in place.
///
/// This stage:
/// - Opens the procedure sheet and the procedures workbook
/// - Resolves unit-context labels for every row
/// - Runs the rule chain and writes commands and alerts into the sheet
/// - Saves the sheet back to `infile` with the output styling applied
pub fn translate_workbook(
    infile: &Path,
    procfile: &Path,
    config: &EngineConfig,
) -> Result<TranslateOutcome> {
    let translate_span = info_span!("translate", infile = %infile.display());
    let _translate_guard = translate_span.enter();
    let translate_start = Instant::now();

    let mut sheet = Sheet::open(infile).with_context(|| format!("open {}", infile.display()))?;
    let procedure_sheet =
        Sheet::open(procfile).with_context(|| format!("open {}", procfile.display()))?;
    let procedures = ProcedureIndex::from_sheet(&procedure_sheet);
    info!(
        rows = sheet.row_count(),
        procedures = procedures.len(),
        "workbooks loaded"
    );

    info_span!("context_pass").in_scope(|| resolve_contexts(&mut sheet, config));

    let engine = TranslationEngine::new(config.clone());
    let report = info_span!("translate_pass").in_scope(|| engine.run(&mut sheet, &procedures));

    sheet
        .save(infile, &translated_save_options(config))
        .with_context(|| format!("save {}", infile.display()))?;

    info!(
        rows = report.rows,
        translated = report.translated_rows,
        alerts = report.alert_count(),
        duration_ms = translate_start.elapsed().as_millis(),
        "translate complete"
    );

    Ok(TranslateOutcome {
        report,
        outfile: infile.to_path_buf(),
    })
}

/// Write the run report to `path` as pretty-printed JSON.
pub fn write_report_json(report: &RunReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Column styling applied to the translated sheet before it is saved.
fn translated_save_options(config: &EngineConfig) -> SaveOptions {
    let body = CellStyle {
        font_name: Some("Calibri".to_owned()),
        font_size: Some(10.0),
        ..CellStyle::default()
    };
    let alert = CellStyle {
        red_text: true,
        ..body.clone()
    };
    SaveOptions {
        column_styles: vec![
            (config.layout.context, body.clone()),
            (config.layout.output, body),
            (config.layout.alert, alert),
        ],
        column_widths: Vec::new(),
    }
}

// ============================================================================
// Split
// ============================================================================

/// Partition a translated workbook into per-module workbooks under `outfolder`.
pub fn split_workbook(
    infile: &Path,
    outfolder: &Path,
    config: &EngineConfig,
) -> Result<SplitReport> {
    let split_span = info_span!("split", infile = %infile.display());
    let _split_guard = split_span.enter();
    let split_start = Instant::now();

    let sheet = Sheet::open(infile).with_context(|| format!("open {}", infile.display()))?;
    let report = split_sheet(&sheet, config, outfolder)
        .with_context(|| format!("partition into {}", outfolder.display()))?;

    info!(
        rows = report.rows,
        files = report.file_count(),
        duration_ms = split_start.elapsed().as_millis(),
        "split complete"
    );

    Ok(report)
}
