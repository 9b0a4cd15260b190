//! CLI argument definitions for the rig-script translator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{DebugLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rigscript",
    version,
    about = "Rig-script translator - Convert test procedures to rig command notation",
    long_about = "Convert DOORS-exported test procedure workbooks into the\n\
                  colon-delimited rig command notation.\n\n\
                  `translate` rewrites a procedure sheet in place; `split` partitions\n\
                  a translated sheet into one workbook per module."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for trace, -q for info, -qq for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<DebugLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Translate a procedure workbook in place.
    Translate(TranslateArgs),

    /// Partition a translated workbook into per-module files.
    Split(SplitArgs),
}

#[derive(Parser)]
pub struct TranslateArgs {
    /// Procedure workbook to translate (rewritten in place).
    #[arg(short = 'i', long = "infile", value_name = "XLSX")]
    pub infile: PathBuf,

    /// Procedures workbook used to resolve ID cross-references.
    #[arg(short = 'p', long = "procfile", value_name = "XLSX")]
    pub procfile: PathBuf,

    /// Log file capturing per-row translation decisions.
    #[arg(short = 'l', long = "logfile", value_name = "PATH")]
    pub logfile: PathBuf,

    /// Also write the run report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Translated workbook to partition.
    #[arg(short = 'i', long = "infile", value_name = "XLSX")]
    pub infile: PathBuf,

    /// Directory receiving the per-module workbooks (created if missing).
    #[arg(short = 'o', long = "outfolder", value_name = "DIR")]
    pub outfolder: PathBuf,

    /// Log file capturing per-row partition decisions.
    #[arg(short = 'l', long = "logfile", value_name = "PATH")]
    pub logfile: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
