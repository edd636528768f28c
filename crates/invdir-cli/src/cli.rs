//! CLI argument definitions for the investor directory builder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "invdir",
    version,
    about = "Investor directory builder - merge investor lists into one JSON directory",
    long_about = "Merge heterogeneous investor spreadsheets into one normalized directory.\n\n\
                  Column names are reconciled onto a fixed set of fields, placeholder\n\
                  values are removed, and every record is tagged with its source."
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
    /// Read every configured source and write the directory snapshot.
    Build(BuildArgs),

    /// Count the records of an existing snapshot per source.
    Sources(SourcesArgs),

    /// List the canonical fields and the column names that map to them.
    Fields,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Directory holding the source files.
    #[arg(long = "resources", value_name = "DIR", default_value = "resources")]
    pub resources: PathBuf,

    /// Snapshot file to write.
    #[arg(
        long = "output",
        short = 'o',
        value_name = "FILE",
        default_value = "public/data/investors.json"
    )]
    pub output: PathBuf,

    /// TOML source catalog (default: the built-in catalog).
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Also write the run summary as plain text.
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Keep only the first record for each name (case-insensitive).
    #[arg(long = "dedupe")]
    pub dedupe: bool,
}

#[derive(Args)]
pub struct SourcesArgs {
    /// Snapshot file to read.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Also write the counts to this file.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
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
