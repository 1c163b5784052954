//! Rank resolution.
//!
//! Given a keyword and a brand URL, pages through organic search results and
//! reports the first position whose link contains the brand domain.
//!
//! Per page the resolver moves between three terminal states and one
//! continuing state:
//! - error response: `ApiError`, no further pages
//! - brand link on the page: `Found`, no further pages
//! - last page scanned without a match: `NotFound`
//! - otherwise: wait the page delay, fetch the next page
//!
//! Pages are fetched strictly one after another. Nothing is retried, and an
//! error drops whatever earlier pages yielded.

mod types;

use std::time::Duration;

use log::{debug, info, warn};

use crate::config::{DEFAULT_MAX_RESULTS, DEFAULT_PAGE_DELAY, DEFAULT_PAGE_SIZE};
use crate::domain::{link_matches, normalize_brand_domain};
use crate::error_handling::InputError;
use crate::search::{PageRequest, SearchProvider};

pub use types::{RankOutcome, RankQuery, Resolution, ScannedLink};

/// Resolves rank queries against a `SearchProvider`.
pub struct RankResolver<P> {
    provider: P,
    page_delay: Duration,
}

impl<P: SearchProvider> RankResolver<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    /// Sets the fixed delay inserted between consecutive page requests.
    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolves `query` scanning the default 100 results in pages of 10.
    pub async fn resolve(&self, query: &RankQuery) -> Result<Resolution, InputError> {
        self.resolve_with(query, DEFAULT_MAX_RESULTS, DEFAULT_PAGE_SIZE)
            .await
    }

    /// Resolves `query` scanning up to `max_results` results in pages of `page_size`.
    ///
    /// # Errors
    ///
    /// `InputError::InvalidPaging` unless `max_results` is a positive multiple
    /// of `page_size`. Search failures are not errors here: they become
    /// `RankOutcome::ApiError`.
    pub async fn resolve_with(
        &self,
        query: &RankQuery,
        max_results: u32,
        page_size: u32,
    ) -> Result<Resolution, InputError> {
        validate_paging(max_results, page_size)?;

        let brand_domain = normalize_brand_domain(&query.brand_url);
        if brand_domain.is_empty() {
            warn!(
                "Brand URL {:?} has no usable domain; '{}' reported as not found",
                query.brand_url, query.keyword
            );
            return Ok(Resolution {
                outcome: RankOutcome::NotFound,
                scanned: Vec::new(),
                pages_fetched: 0,
            });
        }

        let total_pages = max_results / page_size;
        let mut scanned = Vec::new();

        for page in 1..=total_pages {
            let start = (page - 1) * page_size;
            let request = PageRequest {
                keyword: &query.keyword,
                language: &query.language,
                country: &query.country,
                location: query.location.as_deref(),
                offset: start,
                count: page_size,
            };

            debug!(
                "Fetching page {}/{} for '{}' (start={})",
                page, total_pages, query.keyword, start
            );

            let results = match self.provider.fetch_page(&request).await {
                Ok(search_page) => search_page.results,
                Err(e) => {
                    warn!("Search API error for '{}': {}", query.keyword, e);
                    return Ok(Resolution {
                        outcome: RankOutcome::ApiError {
                            message: e.to_string(),
                        },
                        scanned: Vec::new(),
                        pages_fetched: page,
                    });
                }
            };

            for (index, result) in results.into_iter().take(page_size as usize).enumerate() {
                let position = start + index as u32 + 1;

                if link_matches(&brand_domain, &result.link) {
                    info!(
                        "'{}': {} found at position {} (page {})",
                        query.keyword, brand_domain, position, page
                    );
                    scanned.push(ScannedLink {
                        position,
                        link: result.link.clone(),
                    });
                    return Ok(Resolution {
                        outcome: RankOutcome::Found {
                            position,
                            page,
                            matched_url: result.link,
                        },
                        scanned,
                        pages_fetched: page,
                    });
                }

                scanned.push(ScannedLink {
                    position,
                    link: result.link,
                });
            }

            if page < total_pages && !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }
        }

        info!(
            "'{}': {} not found in top {} results",
            query.keyword, brand_domain, max_results
        );
        Ok(Resolution {
            outcome: RankOutcome::NotFound,
            scanned,
            pages_fetched: total_pages,
        })
    }
}

/// Checks that `max_results` is a positive multiple of `page_size`.
pub fn validate_paging(max_results: u32, page_size: u32) -> Result<(), InputError> {
    if page_size == 0 || max_results == 0 || max_results % page_size != 0 {
        return Err(InputError::InvalidPaging {
            max_results,
            page_size,
        });
    }
    Ok(())
}
