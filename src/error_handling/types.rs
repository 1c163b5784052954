//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

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
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

/// Failure of one search page request.
///
/// Remote-reported errors and transport failures are deliberately collapsed
/// into one type: the resolver handles them identically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The API answered with an `error` field.
    #[error("{0}")]
    Api(String),

    /// The request did not complete within the configured timeout.
    #[error("Search request timed out")]
    Timeout,

    /// Connection to the search endpoint failed.
    #[error("Could not connect to search API: {0}")]
    Connect(String),

    /// Non-success HTTP status without an error message in the body.
    #[error("Search API returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("Malformed search API response: {0}")]
    Decode(String),

    /// Any other request failure.
    #[error("Search request failed: {0}")]
    Request(String),
}

/// Input validation failures, raised before any external call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a brand URL")]
    EmptyBrandUrl,

    #[error("Please enter at least one keyword")]
    NoKeywords,

    #[error("No SerpApi key configured (set SERPAPI_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("max results ({max_results}) must be a positive multiple of page size ({page_size})")]
    InvalidPaging { max_results: u32, page_size: u32 },

    #[error("Unknown state or union territory: {0}")]
    UnknownState(String),

    #[error("A city requires a state")]
    CityWithoutState,
}
