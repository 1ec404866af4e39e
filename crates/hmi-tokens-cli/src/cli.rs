//! CLI argument definitions for the token inspector.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use hmi_tokens_cli::logging::{LogConfig, LogFormat, ansi_enabled};

#[derive(Parser)]
#[command(
    name = "hmi-tokens",
    version,
    about = "Inspect the performance night border radius tokens",
    long_about = "List, look up, audit and export the border radius design tokens.\n\n\
                  Values are fixed at build time; this tool never modifies them."
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

impl Cli {
    /// Logging configuration for these flags.
    ///
    /// `--log-level` beats `-v`/`-q`, and either one disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let writes_to_file = self.log_file.is_some();
        LogConfig {
            use_env_filter: !(self.verbosity.is_present() || self.log_level.is_some()),
            ..LogConfig::default()
        }
        .with_level(level_filter)
        .with_format(self.log_format.into())
        .with_ansi(ansi_enabled(
            self.color.color,
            writes_to_file,
            io::stderr().is_terminal(),
        ))
        .with_log_file(self.log_file.clone())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List every token with its value.
    List(ListArgs),

    /// Print the value of a single token.
    Get(GetArgs),

    /// Check the token set for invalid values and alias drift.
    Audit(AuditArgs),

    /// Write all tokens as a JSON object.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ListFormatArg,
}

#[derive(Parser)]
pub struct GetArgs {
    /// Token name (e.g. radius8, md). Case and `_`/`-` separators are ignored.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Print the bare number without the `dp` unit.
    #[arg(long = "raw")]
    pub raw: bool,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Exit with a failure status when the audit reports warnings.
    #[arg(long = "deny-warnings")]
    pub deny_warnings: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ListFormatArg {
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
