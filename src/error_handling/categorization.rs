//! Error categorization.
//!
//! Maps `reqwest` transport failures onto `SearchError` so that a timeout,
//! a refused connection and an undecodable body all surface as readable
//! messages.

use crate::config::MAX_ERROR_MESSAGE_LENGTH;

use super::types::SearchError;

/// Categorizes a `reqwest::Error` into a `SearchError`.
///
/// Status codes are checked first, then the error kind. The API key is part
/// of the request query string, so only the URL path is kept in the message.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> SearchError {
    if let Some(status) = error.status() {
        return SearchError::Status(status.as_u16());
    }

    if error.is_timeout() {
        return SearchError::Timeout;
    }

    let mut message = error.to_string();
    if let Some(url) = error.url() {
        message = message.replace(url.as_str(), url.path());
    }
    let message = truncate_error_message(&message);

    if error.is_connect() {
        SearchError::Connect(message)
    } else if error.is_decode() {
        SearchError::Decode(message)
    } else {
        SearchError::Request(message)
    }
}

/// Truncates an error message to `MAX_ERROR_MESSAGE_LENGTH` characters.
pub fn truncate_error_message(message: &str) -> String {
    if message.chars().count() <= MAX_ERROR_MESSAGE_LENGTH {
        return message.to_string();
    }
    let truncated: String = message.chars().take(MAX_ERROR_MESSAGE_LENGTH).collect();
    format!(
        "{}... (truncated, original length: {} chars)",
        truncated,
        message.chars().count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_message_unchanged() {
        assert_eq!(truncate_error_message("boom"), "boom");
    }

    #[test]
    fn test_truncate_long_message() {
        let long = "x".repeat(MAX_ERROR_MESSAGE_LENGTH + 10);
        let truncated = truncate_error_message(&long);
        assert!(truncated.starts_with(&"x".repeat(MAX_ERROR_MESSAGE_LENGTH)));
        assert!(truncated.contains("original length: 2010 chars"));
    }

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = reqwest::Client::new();
        let err = client
            .get("http://127.0.0.1:9/search?api_key=secret")
            .send()
            .await
            .expect_err("connection should be refused");
        let categorized = categorize_reqwest_error(&err);
        assert!(
            matches!(categorized, SearchError::Connect(_) | SearchError::Request(_)),
            "unexpected category: {categorized:?}"
        );
        assert!(!categorized.to_string().contains("secret"));
    }
}
