//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::CheckConfig;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for search API requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Per-request timeout from the config (bounds every page fetch)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &CheckConfig) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
