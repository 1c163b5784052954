//! Rank resolution types.

use serde::Serialize;

/// One keyword to check for one brand in one search context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankQuery {
    pub keyword: String,
    /// Brand URL as entered; the scheme is optional
    pub brand_url: String,
    /// `gl` code
    pub country: String,
    /// `hl` code
    pub language: String,
    pub location: Option<String>,
}

/// Terminal result of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RankOutcome {
    /// `position` is global across pages (page 3, entry 5 is rank 25 at page size 10).
    Found {
        position: u32,
        page: u32,
        matched_url: String,
    },
    NotFound,
    ApiError { message: String },
}

impl RankOutcome {
    /// Rank as shown to users and stored in the legacy `rank` column.
    pub fn display_rank(&self) -> String {
        match self {
            RankOutcome::Found { position, .. } => position.to_string(),
            RankOutcome::NotFound => crate::config::RANK_NOT_FOUND.to_string(),
            RankOutcome::ApiError { .. } => crate::config::RANK_API_ERROR.to_string(),
        }
    }
}

/// A result link seen while scanning, with its global position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedLink {
    pub position: u32,
    pub link: String,
}

/// Outcome of a resolution plus the diagnostic trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: RankOutcome,
    /// Links scanned up to the match, in rank order; empty for `ApiError`
    pub scanned: Vec<ScannedLink>,
    /// Number of page requests issued
    pub pages_fetched: u32,
}
