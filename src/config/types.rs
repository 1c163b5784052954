//! Configuration types.
//!
//! This module defines the logging option enums and the library-level
//! configuration for a rank check batch.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DB_PATH, DEFAULT_COUNTRY, DEFAULT_ENDPOINT, DEFAULT_ENGINE, DEFAULT_KEYWORD_DELAY,
    DEFAULT_LANGUAGE, DEFAULT_MAX_RESULTS, DEFAULT_PAGE_DELAY, DEFAULT_PAGE_SIZE,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

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

/// Configuration for one rank check batch (no CLI dependencies).
///
/// One batch checks every keyword against the same brand and the same
/// country/language/location context.
///
/// # Examples
///
/// ```no_run
/// use rank_tracker::CheckConfig;
///
/// let config = CheckConfig {
///     brand_url: "https://digitalpiloto.com".to_string(),
///     keywords: vec!["seo agency".to_string()],
///     api_key: "secret".to_string(),
///     location: Some("Kolkata, West Bengal, India".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Brand URL whose rank is checked (scheme optional)
    pub brand_url: String,

    /// Keywords to check, one query each
    pub keywords: Vec<String>,

    /// Country code sent as `gl`
    pub country: String,

    /// Language code sent as `hl`
    pub language: String,

    /// Free-text geographic qualifier sent as `location`
    pub location: Option<String>,

    /// Database path (SQLite file)
    pub db_path: PathBuf,

    /// SerpApi credential
    pub api_key: String,

    /// Search endpoint URL
    pub endpoint: String,

    /// Value of the `engine` parameter
    pub engine: String,

    /// Deepest rank scanned per keyword
    pub max_results: u32,

    /// Results requested per page
    pub page_size: u32,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Delay between page requests of one keyword
    pub page_delay: Duration,

    /// Delay between keywords
    pub keyword_delay: Duration,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            brand_url: String::new(),
            keywords: Vec::new(),
            country: DEFAULT_COUNTRY.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            location: None,
            db_path: PathBuf::from(DB_PATH),
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            engine: DEFAULT_ENGINE.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            page_size: DEFAULT_PAGE_SIZE,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            page_delay: DEFAULT_PAGE_DELAY,
            keyword_delay: DEFAULT_KEYWORD_DELAY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
