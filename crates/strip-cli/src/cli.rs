//! CLI argument definitions for stripscan.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use strip_model::HistoryFilter;

#[derive(Parser)]
#[command(
    name = "stripscan",
    version,
    about = "Mock diagnostic-strip analysis",
    long_about = "Run a simulated analysis of a diagnostic strip and show mock biomarker results.\n\n\
                  Results are randomized; pass --seed to reproduce a run."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Strip-type catalog CSV (default: $STRIPSCAN_CATALOG, then the built-in catalog).
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the available strip types.
    Strips,

    /// Run a mock analysis of a strip type.
    Analyze(AnalyzeArgs),

    /// Show mock analysis history for a strip type.
    History(HistoryArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Strip type identifier (see `stripscan strips`).
    #[arg(value_name = "STRIP_ID")]
    pub strip_id: String,

    /// Seed for the random source; a random seed is used and logged when omitted.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct HistoryArgs {
    /// Strip type identifier (see `stripscan strips`).
    #[arg(value_name = "STRIP_ID")]
    pub strip_id: String,

    /// Seed for the random source.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Only list runs with this status (all, normal, attention, critical).
    #[arg(long = "filter", default_value = "all")]
    pub filter: HistoryFilter,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
