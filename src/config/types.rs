//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_DOMAIN, DEFAULT_MAX_CONCURRENCY, DNS_TIMEOUT_SECS};
use crate::dns::CompareOptions;
use crate::records::NormalizeOptions;

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

/// Run configuration.
///
/// Parsed from the command line by the binary, or constructed directly when
/// the crate is used as a library.
///
/// # Examples
///
/// ```no_run
/// use fqdn_builder::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("devices.csv"),
///     output: Some(PathBuf::from("fqdns.csv")),
///     default_domain: "corp.example.net".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fqdn_builder",
    version,
    about = "Builds standardized FQDN/PTR names from a device CSV and checks them against DNS"
)]
pub struct Config {
    /// CSV file with device rows (`-` reads from stdin)
    pub file: PathBuf,

    /// Where to write the result CSV (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Where to write rows that failed validation
    #[arg(long)]
    pub rejects: Option<PathBuf>,

    /// Domain used for rows without a `domain_name`
    #[arg(long, env = "FQDN_DEFAULT_DOMAIN", default_value = DEFAULT_DOMAIN)]
    pub default_domain: String,

    /// Shorten interface types (GigabitEthernet0/1 -> gi0-1)
    #[arg(long)]
    pub abbreviate_interfaces: bool,

    /// Accept an existing interface PTR for device-level rows
    #[arg(long)]
    pub prefer_interface_ptr: bool,

    /// Maximum rows looked up concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Token normalization settings derived from this configuration.
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            abbreviate_interfaces: self.abbreviate_interfaces,
        }
    }

    /// Record comparison settings derived from this configuration.
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            prefer_interface_ptr: self.prefer_interface_ptr,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("devices.csv"),
            output: None,
            rejects: None,
            default_domain: DEFAULT_DOMAIN.to_string(),
            abbreviate_interfaces: false,
            prefer_interface_ptr: false,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
