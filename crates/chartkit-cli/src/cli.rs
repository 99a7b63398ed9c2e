//! CLI argument definitions for chartkit.

use std::path::PathBuf;

use chartkit_model::ViewKind;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "chartkit",
    version,
    about = "Turn CSV rows into grouped, ranked chart series",
    long_about = "Load a CSV file, coerce its fields and aggregate it into the \
                  chart series of the configured views.\n\n\
                  Column names come from a dataset schema (see --schema)."
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

    /// TOML file naming the dataset's category, time and value columns.
    #[arg(long = "schema", value_name = "PATH", global = true)]
    pub schema: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the configured views.
    Views,

    /// Compute and print chart series for a CSV file.
    Chart(ChartArgs),

    /// Print numeric column statistics for a CSV file.
    Describe(DescribeArgs),
}

#[derive(Parser)]
pub struct ChartArgs {
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// View to compute; repeat for several (default: all views).
    #[arg(long = "view", value_enum)]
    pub views: Vec<ViewArg>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct DescribeArgs {
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewArg {
    ByCategoryAverage,
    ByTimeAverage,
    BySecondaryCategoryDistribution,
    ByCategoryFrequency,
}

impl From<ViewArg> for ViewKind {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::ByCategoryAverage => ViewKind::ByCategoryAverage,
            ViewArg::ByTimeAverage => ViewKind::ByTimeAverage,
            ViewArg::BySecondaryCategoryDistribution => ViewKind::BySecondaryCategoryDistribution,
            ViewArg::ByCategoryFrequency => ViewKind::ByCategoryFrequency,
        }
    }
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
