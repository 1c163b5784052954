//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, paging, throttling, timeouts)
//! - Logging option types
//! - The library-level `CheckConfig`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{CheckConfig, LogFormat, LogLevel};
