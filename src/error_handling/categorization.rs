//! Failure categorization.
//!
//! Maps endpoint failures to a small set of labels used in log lines and in the
//! scan report.

use strum_macros::EnumIter as EnumIterMacro;

use super::types::EndpointError;

/// Coarse category of a failed endpoint attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// The request timed out
    Timeout,
    /// TCP/TLS connection could not be established
    Connect,
    /// Any other transport error
    Request,
    /// HTTP 429
    RateLimited,
    /// Other 4xx status
    ClientStatus,
    /// 5xx status
    ServerStatus,
    /// Non-success status outside 4xx/5xx
    OtherStatus,
    /// Body is not the provider's JSON document
    Decode,
    /// Provider reported a failed lookup in a 200 body
    Rejected,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    /// Short human-readable label, used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "request timeout",
            FailureKind::Connect => "connection error",
            FailureKind::Request => "request error",
            FailureKind::RateLimited => "rate limited (429)",
            FailureKind::ClientStatus => "client error status",
            FailureKind::ServerStatus => "server error status",
            FailureKind::OtherStatus => "unexpected status",
            FailureKind::Decode => "undecodable response",
            FailureKind::Rejected => "rejected by provider",
        }
    }
}

/// Categorizes a transport-level `reqwest::Error`.
pub(crate) fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_decode() || error.is_body() {
        FailureKind::Decode
    } else {
        FailureKind::Request
    }
}

/// Categorizes a failed endpoint attempt.
pub fn categorize_endpoint_error(error: &EndpointError) -> FailureKind {
    match error {
        EndpointError::Unreachable { source, .. } => categorize_reqwest_error(source),
        EndpointError::Status { status, .. } => match status.as_u16() {
            429 => FailureKind::RateLimited,
            _ if status.is_client_error() => FailureKind::ClientStatus,
            _ if status.is_server_error() => FailureKind::ServerStatus,
            _ => FailureKind::OtherStatus,
        },
        EndpointError::Decode { .. } => FailureKind::Decode,
        EndpointError::Rejected { .. } => FailureKind::Rejected,
    }
}
