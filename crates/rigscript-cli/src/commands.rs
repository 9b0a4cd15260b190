//! Command entry points for the CLI binary.

use anyhow::Result;

use rigscript_cli::pipeline::{
    TranslateOutcome, split_workbook, translate_workbook, write_report_json,
};
use rigscript_model::EngineConfig;
use rigscript_split::SplitReport;

use crate::cli::{SplitArgs, TranslateArgs};

/// Translate the workbook named by the arguments in place.
pub fn run_translate(args: &TranslateArgs) -> Result<TranslateOutcome> {
    let config = EngineConfig::default();
    let outcome = translate_workbook(&args.infile, &args.procfile, &config)?;
    if let Some(path) = &args.report_json {
        write_report_json(&outcome.report, path)?;
    }
    Ok(outcome)
}

/// Partition the translated workbook into per-module files.
pub fn run_split(args: &SplitArgs) -> Result<SplitReport> {
    let config = EngineConfig::default();
    split_workbook(&args.infile, &args.outfolder, &config)
}
