//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

use crate::provider::Provider;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured endpoint is not a valid URL.
    #[error("Invalid endpoint URL {url}: {source}")]
    EndpointError {
        /// The rejected URL as given
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },
}

/// A single failed attempt against one endpoint.
///
/// Every variant is handled the same way by the resolver: logged, recorded and
/// skipped in favour of the next endpoint.
#[derive(Error, Debug)]
pub enum EndpointError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Failed to fetch from {url}: {source}")]
    Unreachable {
        /// Endpoint URL
        url: String,
        /// Transport error
        #[source]
        source: ReqwestError,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Endpoint URL
        url: String,
        /// Status code received
        status: StatusCode,
    },

    /// The body could not be read as the provider's JSON document.
    #[error("Failed to decode response from {url}: {message}")]
    Decode {
        /// Endpoint URL
        url: String,
        /// Decoder message
        message: String,
    },

    /// The provider answered 200 but reported a failure in the body.
    #[error("{provider} rejected the lookup at {url}: {reason}")]
    Rejected {
        /// Endpoint URL
        url: String,
        /// Provider that produced the rejection
        provider: Provider,
        /// Reason given by the provider, if any
        reason: String,
    },
}

impl EndpointError {
    /// URL of the endpoint this attempt was made against.
    pub fn url(&self) -> &str {
        match self {
            EndpointError::Unreachable { url, .. }
            | EndpointError::Status { url, .. }
            | EndpointError::Decode { url, .. }
            | EndpointError::Rejected { url, .. } => url,
        }
    }
}

/// Terminal scan failures surfaced to the caller.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Every configured endpoint failed.
    #[error("All IP API endpoints failed ({attempts} attempted)")]
    AllSourcesFailed {
        /// Number of endpoints tried
        attempts: usize,
        /// One entry per failed attempt, in endpoint order
        failures: Vec<EndpointError>,
    },

    /// The resolver was built without any endpoint.
    #[error("No IP API endpoints configured")]
    NoEndpoints,
}
