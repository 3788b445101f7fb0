//! CLI argument definitions for the `reach` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "reach",
    version,
    about = "Outreach contact-list manager - import CSV exports into contact lists",
    long_about = "Import CSV contact exports into named contact lists.\n\n\
                  Columns are auto-detected from the header row and can be\n\
                  overridden per field. Lists are stored as JSON documents and\n\
                  can be inspected or exported back to CSV."
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
    /// Import a CSV file into a new contact list.
    Import(ImportArgs),

    /// Show the detected column mapping and sample contacts for a CSV file.
    Preview(PreviewArgs),

    /// List stored contact lists.
    Lists(StoreArgs),

    /// Show the contacts of one stored list.
    Show(ShowArgs),

    /// Export a stored list back to CSV.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct StoreArgs {
    /// Directory holding the contact-list store.
    #[arg(long = "store", value_name = "DIR", default_value = "reach-store")]
    pub store: PathBuf,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Path to the CSV file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// List name to use instead of the filename (the date suffix is still
    /// appended).
    #[arg(long = "list-name", value_name = "NAME")]
    pub list_name: Option<String>,

    /// Free-form description stored on the list.
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Manual mapping override as field=header (repeatable).
    ///
    /// Fields: email, first_name, last_name, company, status, message,
    /// template_title.
    #[arg(long = "map", value_name = "FIELD=HEADER")]
    pub map: Vec<String>,

    /// Validate and report without writing to the store.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Path to the CSV file to preview.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Manual mapping override as field=header (repeatable).
    #[arg(long = "map", value_name = "FIELD=HEADER")]
    pub map: Vec<String>,

    /// Number of contacts to show.
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub limit: usize,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Name of the stored list.
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Name of the stored list.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output CSV path.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
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
