//! External search API boundary.
//!
//! The resolver only sees `SearchProvider`: one call per result page. The
//! production implementation is `SerpApiClient`; tests substitute scripted
//! providers or point the client at a mock server.

mod serpapi;
mod types;

use async_trait::async_trait;

use crate::error_handling::SearchError;

pub use serpapi::{parse_response, SerpApiClient};
pub use types::{OrganicResult, PageRequest, SearchPage};

/// Source of paginated organic search results.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Fetches one page of organic results.
    ///
    /// A remote-reported error and a transport failure are both returned as
    /// `SearchError`.
    async fn fetch_page(&self, request: &PageRequest<'_>) -> Result<SearchPage, SearchError>;
}
