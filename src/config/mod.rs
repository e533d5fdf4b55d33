//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default endpoints, scan id format, map template)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
