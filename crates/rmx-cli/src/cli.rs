//! CLI argument definitions for the migration matrix builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rmx",
    version,
    about = "Rating migration matrix builder",
    long_about = "Build rating migration matrices from transition summary tables.\n\n\
                  Column roles (start-state, end-state, metric) are inferred from\n\
                  the table schema unless supplied explicitly."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a migration matrix from a CSV table and print it.
    Build(BuildArgs),

    /// Resolve and print the column role bindings without building.
    Roles(RolesArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Column holding the starting state (skips inference for this role).
    #[arg(long = "start-column", value_name = "NAME")]
    pub start_column: Option<String>,

    /// Column holding the ending state (skips inference for this role).
    #[arg(long = "end-column", value_name = "NAME")]
    pub end_column: Option<String>,

    /// Column holding the metric amount (skips inference for this role).
    #[arg(long = "metric-column", value_name = "NAME")]
    pub metric_column: Option<String>,

    /// Treat the input as raw per-observation data and summarize it first.
    ///
    /// Raw rows carry one observation per (id, date) pair; the summarizer
    /// pivots them into one row per (start, end) rating pair.
    #[arg(long = "raw")]
    pub raw: bool,

    /// Raw mode: column identifying the position.
    #[arg(long = "id-column", value_name = "NAME", default_value = "id")]
    pub id_column: String,

    /// Raw mode: column carrying the observation date.
    #[arg(long = "date-column", value_name = "NAME", default_value = "date")]
    pub date_column: String,

    /// Raw mode: column carrying the rating.
    #[arg(long = "state-column", value_name = "NAME", default_value = "rating")]
    pub state_column: String,

    /// Raw mode: column carrying the metric amount.
    #[arg(long = "value-column", value_name = "NAME", default_value = "amount")]
    pub value_column: String,

    /// Print the matrix as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RolesArgs {
    /// Path to the summary CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Column holding the starting state (skips inference for this role).
    #[arg(long = "start-column", value_name = "NAME")]
    pub start_column: Option<String>,

    /// Column holding the ending state (skips inference for this role).
    #[arg(long = "end-column", value_name = "NAME")]
    pub end_column: Option<String>,

    /// Column holding the metric amount (skips inference for this role).
    #[arg(long = "metric-column", value_name = "NAME")]
    pub metric_column: Option<String>,
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
