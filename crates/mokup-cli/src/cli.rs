//! CLI argument definitions for mokup.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use mokup_cli::ColumnArg;

#[derive(Parser)]
#[command(
    name = "mokup",
    version,
    about = "Generate mock CSV data from per-column candidate values",
    long_about = "Generate mock CSV data from per-column candidate values.\n\n\
                  Each cell is drawn uniformly at random from its column's values.\n\
                  List a value twice to make it twice as likely."
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

    /// Settings file (default: ./mokup.toml, optional).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a CSV file from the assembled columns.
    Generate(GenerateArgs),

    /// Save the assembled columns as the stored configuration.
    Save(SourceArgs),

    /// Print the stored configuration.
    Show,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Number of data rows (default: output.rows from settings).
    #[arg(long = "rows", short = 'n', value_name = "N")]
    pub rows: Option<String>,

    /// CSV file to write (default: output.path from settings).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Seed the random generator for reproducible output.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub sources: SourceArgs,
}

/// Where the columns come from.
///
/// The settings preset is applied first, then these in order.
#[derive(Args)]
pub struct SourceArgs {
    /// Apply a TOML column preset.
    #[arg(long = "preset", value_name = "PATH")]
    pub preset: Option<PathBuf>,

    /// Start from the stored configuration.
    #[arg(long = "from-store")]
    pub from_store: bool,

    /// Define a column inline; replaces all other columns when given.
    #[arg(long = "column", value_name = "HEADER=V1,V2,...")]
    pub columns: Vec<ColumnArg>,
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
