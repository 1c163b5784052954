//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the search endpoint, paging limits and request pacing.

use std::time::Duration;

/// Default SerpApi search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://serpapi.com/search";

/// Search engine identifier sent as the `engine` parameter.
pub const DEFAULT_ENGINE: &str = "google";

/// Environment variable holding the SerpApi key.
pub const API_KEY_ENV: &str = "SERPAPI_KEY";

/// Default SQLite database path.
pub const DB_PATH: &str = "./rank_tracker.db";

// Paging
/// Organic results requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Deepest rank scanned per keyword (must be a multiple of the page size).
pub const DEFAULT_MAX_RESULTS: u32 = 100;

// Pacing
/// Fixed delay between consecutive page requests of one keyword.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(1000);
/// Fixed delay between consecutive keywords of one batch.
pub const DEFAULT_KEYWORD_DELAY: Duration = Duration::from_millis(1000);

/// Per-request timeout in seconds
/// SerpApi answers most queries in 2-5s; uncached queries with a location can take longer.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default country (`gl`) code.
pub const DEFAULT_COUNTRY: &str = "in";
/// Default interface language (`hl`) code.
pub const DEFAULT_LANGUAGE: &str = "en";

/// User-Agent sent to the search API.
pub const DEFAULT_USER_AGENT: &str = concat!("rank_tracker/", env!("CARGO_PKG_VERSION"));

/// Maximum error message length in characters (2000 chars)
/// Prevents database bloat from unbounded error messages
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;

// Legacy `rank` column values
pub const RANK_NOT_FOUND: &str = "Not Found";
pub const RANK_API_ERROR: &str = "API Error";
