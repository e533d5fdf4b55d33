//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_ENDPOINTS, DEFAULT_USER_AGENT};
use crate::error_handling::InitializationError;
use crate::provider::SourceEndpoint;

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

/// Scan configuration.
///
/// Parsed from the command line by the binary, or built programmatically by
/// library users starting from `Config::default()`.
///
/// # Examples
///
/// ```bash
/// # Scan with the built-in endpoint list
/// ip_recon
///
/// # Export the result and print the map link
/// ip_recon --export-dir ./scans --show-map
///
/// # Use a single custom endpoint
/// ip_recon --endpoint https://ipwho.is/
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ip_recon",
    about = "Looks up the public IP address and its geolocation."
)]
pub struct Config {
    /// Geolocation endpoint URL, tried in the order given (repeatable).
    /// Replaces the built-in list when present.
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoints: Vec<String>,

    /// Directory to write the JSON export into after a successful scan
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Print the record as indented JSON instead of grouped text
    #[arg(long)]
    pub json: bool,

    /// Print the OpenStreetMap link for the resolved coordinates
    #[arg(long)]
    pub show_map: bool,

    /// Per-request timeout in seconds (no timeout unless set)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

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
            endpoints: Vec::new(),
            export_dir: None,
            json: false,
            show_map: false,
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Builds the ordered endpoint list, detecting each endpoint's provider.
    ///
    /// Falls back to [`DEFAULT_ENDPOINTS`] when no endpoint was configured.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::EndpointError` if a URL cannot be parsed.
    pub fn source_endpoints(&self) -> Result<Vec<SourceEndpoint>, InitializationError> {
        if self.endpoints.is_empty() {
            DEFAULT_ENDPOINTS
                .iter()
                .map(|url| SourceEndpoint::parse(url))
                .collect()
        } else {
            self.endpoints
                .iter()
                .map(|url| SourceEndpoint::parse(url))
                .collect()
        }
    }
}
