//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_CACHE_DIR, DEFAULT_PSL_URL};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
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
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the decomposition results written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated columns
    Plain,
    /// One JSON object per line
    Json,
}

/// How the input is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One domain per line; blank lines and `#` comments are skipped
    Decompose,
    /// Free text; every whitespace-separated token that is a valid domain is reported
    Extract,
}

/// Command-line configuration.
///
/// Can also be constructed programmatically:
///
/// ```no_run
/// use domaintools::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("domains.txt"),
///     allow_private: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domaintools",
    about = "Splits domain names into subdomain, registrable domain and public suffix."
)]
pub struct Config {
    /// File to read (`-` for stdin)
    #[arg(value_parser, default_value = "-")]
    pub file: PathBuf,

    /// Suffix list source: a local path or an http(s) URL
    #[arg(long, default_value = DEFAULT_PSL_URL)]
    pub psl: String,

    /// Directory used to cache a downloaded suffix list
    #[arg(long, value_parser, default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Match rules from the private section of the list
    #[arg(long)]
    pub allow_private: bool,

    /// Input mode: decompose|extract
    #[arg(long, value_enum, default_value_t = Mode::Decompose)]
    pub mode: Mode,

    /// Only print valid domains (decompose mode)
    #[arg(long)]
    pub only_valid: bool,

    /// Output format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Ask DNS for an SOA record when a top-level label is missing from the list
    #[arg(long)]
    pub dns_fallback: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("-"),
            psl: DEFAULT_PSL_URL.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            allow_private: false,
            mode: Mode::Decompose,
            only_valid: false,
            output: OutputFormat::Plain,
            dns_fallback: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
