//! CLI argument definitions for orbis.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

/// Source directory used when `--faf5-dir` is not given.
pub const DEFAULT_FAF5_DIR: &str = "FAF5";
/// Analytical store database used when `--store` is not given.
pub const DEFAULT_STORE_PATH: &str = "orbis.sqlite";

#[derive(Parser)]
#[command(
    name = "orbis",
    version,
    about = "Orbis data pipeline - merge, clean and validate FAF5 CSV extracts",
    long_about = "Merge the CSV extracts of a FAF5 directory, clean and normalize the result,\n\
                  profile its columns and report data-quality issues.\n\n\
                  Outputs are written back into the FAF5 directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (compact for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "compact",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Directory for per-run log files.
    #[arg(
        long = "log-dir",
        value_name = "DIR",
        default_value = "logs",
        global = true
    )]
    pub log_dir: PathBuf,

    /// Log to stderr only.
    #[arg(long = "no-log-file", global = true)]
    pub no_log_file: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline (merge, clean, validate, export).
    Run(RunArgs),

    /// List the source files the pipeline would merge.
    Sources(SourcesArgs),
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// FAF5 directory holding the source CSV files [default: ./FAF5].
    #[arg(long = "faf5-dir", value_name = "DIR")]
    pub faf5_dir: Option<PathBuf>,

    /// Fraction of non-null values that must parse as numbers for a text
    /// column to become numeric [default: 0.9].
    #[arg(long = "numeric-threshold", value_name = "RATIO")]
    pub numeric_threshold: Option<f64>,

    /// SQLite database to load the cleaned and issues tables into
    /// [default: ./orbis.sqlite].
    #[arg(long = "store", value_name = "PATH", conflicts_with = "no_store")]
    pub store: Option<PathBuf>,

    /// Skip the analytical store export.
    #[arg(long = "no-store")]
    pub no_store: bool,
}

impl RunArgs {
    pub fn faf5_dir(&self) -> PathBuf {
        self.faf5_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FAF5_DIR))
    }

    pub fn store_path(&self) -> PathBuf {
        self.store
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
    }
}

#[derive(Args, Debug, Default)]
pub struct SourcesArgs {
    /// FAF5 directory holding the source CSV files [default: ./FAF5].
    #[arg(long = "faf5-dir", value_name = "DIR")]
    pub faf5_dir: Option<PathBuf>,
}

impl SourcesArgs {
    pub fn faf5_dir(&self) -> PathBuf {
        self.faf5_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FAF5_DIR))
    }
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
