//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, per-endpoint attempts and scans
//! - Failure categorization for logging and reporting
//!
//! Per-endpoint failures (`EndpointError`) never leave the resolver on their own;
//! they are logged and collected. Only `ResolveError` reaches the caller.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_endpoint_error, FailureKind};
pub use types::{EndpointError, InitializationError, ResolveError};
