//! CLI argument definitions for the listing cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "carprep",
    version,
    about = "Clean used-car listings into a model-ready table",
    long_about = "Clean scraped used-car listings into a numeric, model-ready table.\n\n\
                  Drops invalid rows, expands the free-text extra column into\n\
                  feature indicators and one-hot encodes the most frequent\n\
                  values of each categorical column."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a listings CSV and optionally write the result.
    Clean(CleanArgs),

    /// Show the feature vocabulary discovered from the extra column.
    Vocabulary(VocabularyArgs),

    /// Print the default pipeline options as JSON.
    Defaults,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Listings CSV to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the cleaned table to this CSV file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON options file (see `carprep defaults`).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Name of the free-text equipment column (overrides the options file).
    #[arg(long = "extra-column", value_name = "NAME")]
    pub extra_column: Option<String>,

    /// Keep rows that contain empty string cells.
    #[arg(long = "keep-empty-rows")]
    pub keep_empty_rows: bool,
}

#[derive(Parser)]
pub struct VocabularyArgs {
    /// Listings CSV to inspect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON options file (see `carprep defaults`).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Name of the free-text equipment column (overrides the options file).
    #[arg(long = "extra-column", value_name = "NAME")]
    pub extra_column: Option<String>,
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
