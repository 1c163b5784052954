//! Batch input parsing and validation.

use crate::config::CheckConfig;
use crate::error_handling::InputError;
use crate::resolver::validate_paging;

/// Splits a multi-line keyword list into keywords.
///
/// Lines are trimmed and empty lines skipped. Every other line is a keyword,
/// including one starting with `#`.
pub fn parse_keywords(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rejects a batch that cannot produce any useful request.
pub fn validate_config(config: &CheckConfig) -> Result<(), InputError> {
    if config.brand_url.trim().is_empty() {
        return Err(InputError::EmptyBrandUrl);
    }
    if config.keywords.iter().all(|k| k.trim().is_empty()) {
        return Err(InputError::NoKeywords);
    }
    if config.api_key.trim().is_empty() {
        return Err(InputError::MissingApiKey);
    }
    validate_paging(config.max_results, config.page_size)
}
