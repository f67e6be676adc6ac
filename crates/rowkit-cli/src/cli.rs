//! CLI argument definitions for rowkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rowkit",
    version,
    about = "Inspect searchable selector data",
    long_about = "Load a selector file (scope configuration plus grouped options)\n\
                  and print the view a searchable selector would show for a\n\
                  search text or scope."
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
    /// Print the filtered view for a search text or scope.
    View(ViewArgs),

    /// List the scope bar labels of a selector file.
    Scopes(ScopesArgs),
}

#[derive(Parser)]
pub struct ViewArgs {
    /// Selector file (JSON).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Free-text search, ignored while a filtering scope is selected.
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    /// Scope label to filter by (takes precedence over --query).
    #[arg(long = "scope", value_name = "NAME")]
    pub scope: Option<String>,

    /// Hide sections left empty by the filter.
    #[arg(long = "hide-empty")]
    pub hide_empty: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ScopesArgs {
    /// Selector file (JSON).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
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
