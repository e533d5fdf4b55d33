//! ip_recon library: public IP and geolocation lookup
//!
//! This library resolves the caller's public IP address through a list of public
//! geolocation APIs tried in order, normalizes whichever provider answered into a
//! single [`CanonicalRecord`], and offers helpers to display, export and map it.
//!
//! # Example
//!
//! ```no_run
//! use ip_recon::{init_client, Config, IpResolver, ScanSession};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let resolver = IpResolver::new(init_client(&config)?, config.source_endpoints()?);
//!
//! let mut session = ScanSession::new();
//! let record = session.scan(&resolver).await?;
//! println!("{:?} in {:?}", record.ip, record.country);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod presentation;
mod provider;
mod record;
mod resolver;
mod session;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_endpoint_error, EndpointError, FailureKind, InitializationError, ResolveError,
};
pub use initialization::init_client;
pub use provider::{normalize, Provider, ProviderFailure, SourceEndpoint};
pub use record::{generate_scan_id, CanonicalRecord, ScanStamp};
pub use resolver::{IpResolver, Resolution};
pub use run::{run_scan, ScanReport};
pub use session::ScanSession;

// Internal run module (contains the scan orchestration used by the binary)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::export::export_json;
    use crate::initialization::init_client;
    use crate::record::CanonicalRecord;
    use crate::resolver::IpResolver;

    /// Results of a completed scan.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// The normalized record
        pub record: CanonicalRecord,
        /// Endpoint that answered
        pub source: String,
        /// Endpoints that failed before `source` answered
        pub failed_endpoints: Vec<String>,
        /// Export file, when an export directory was configured
        pub export_path: Option<PathBuf>,
        /// Map link, when the record has coordinates
        pub map_url: Option<String>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one scan with the provided configuration.
    ///
    /// Builds the HTTP client and endpoint list from `config`, resolves the public
    /// IP record and, if `config.export_dir` is set, writes the JSON export.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - An endpoint URL is invalid or the HTTP client cannot be built
    /// - Every endpoint fails
    /// - The export file cannot be written
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ip_recon::{run_scan, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let report = run_scan(Config::default()).await?;
    /// println!("Answered by {}", report.source);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        let start_time = Instant::now();

        let endpoints = config
            .source_endpoints()
            .context("Failed to configure endpoints")?;
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let resolver = IpResolver::new(client, endpoints);

        let resolution = resolver
            .resolve_detailed()
            .await
            .context("IP lookup failed")?;

        let record = resolution.record;

        let export_path = match config.export_dir.as_deref() {
            Some(dir) => Some(export_json(&record, dir).await?.path),
            None => None,
        };

        let report = ScanReport {
            map_url: record.map_url(),
            record,
            source: resolution.endpoint.url().to_string(),
            failed_endpoints: resolution
                .failures
                .iter()
                .map(|f| f.url().to_string())
                .collect(),
            export_path,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        };

        info!(
            "Scan {} complete in {:.2}s ({} endpoint(s) skipped)",
            report.record.scan_id,
            report.elapsed_seconds,
            report.failed_endpoints.len()
        );

        Ok(report)
    }
}
