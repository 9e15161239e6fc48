//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};

use crate::app::QueryKind;
use crate::config::constants::{APP_NAME, APP_USAGE, DEFAULT_HOST};

/// Logging level for the application.
///
/// Controls the verbosity of diagnostics written to stderr, from most
/// restrictive (Error) to most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line interface.
///
/// Every option is global, so `syndicate --host example.com ns` and
/// `syndicate ns --host example.com` are equivalent.
#[derive(Debug, Parser)]
#[command(name = APP_NAME, about = APP_USAGE)]
pub struct Cli {
    /// Host to query
    #[arg(long, global = true, default_value = DEFAULT_HOST, value_parser = NonEmptyStringValueParser::new())]
    pub host: String,

    /// Log level for diagnostics written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Record lookup to perform
    #[command(subcommand)]
    pub command: Option<QueryKind>,
}

/// Immutable per-invocation configuration.
///
/// Built once from the parsed command line and passed by reference to the
/// dispatcher.
///
/// # Examples
///
/// ```
/// use syndicate::Config;
///
/// let config = Config {
///     host: "example.com".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.host, "example.com");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Host every lookup is performed against
    pub host: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            host: cli.host.clone(),
            log_level: cli.log_level.clone(),
            log_format: cli.log_format.clone(),
        }
    }
}
