// storage/models.rs
// Database models and types

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::config::{RANK_API_ERROR, RANK_NOT_FOUND};

/// Outcome kind stored in the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RankStatus {
    Found,
    NotFound,
    ApiError,
}

impl RankStatus {
    /// Recovers the status of rows written before `status` existed from
    /// their display `rank` value.
    pub fn from_legacy_rank(rank: &str) -> Option<Self> {
        let rank = rank.trim();
        if rank.parse::<u32>().is_ok() {
            Some(RankStatus::Found)
        } else if rank.eq_ignore_ascii_case(RANK_NOT_FOUND) {
            Some(RankStatus::NotFound)
        } else if rank.eq_ignore_ascii_case(RANK_API_ERROR) {
            Some(RankStatus::ApiError)
        } else {
            None
        }
    }
}

/// One persisted rank check, as read back from the `ranks` table.
///
/// Every column added after the first schema version is optional: rows
/// written by older versions leave them NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankRecord {
    pub id: i64,
    pub brand_url: String,
    pub keyword: String,
    /// Display rank: a position, `Not Found` or `API Error`
    pub rank: String,
    pub status: Option<RankStatus>,
    pub position: Option<u32>,
    pub page: Option<u32>,
    pub matched_url: Option<String>,
    pub error_message: Option<String>,
    pub country: String,
    pub language: String,
    pub location: Option<String>,
    /// UTC, `YYYY-MM-DD HH:MM:SS`
    pub checked_at: String,
}

/// History read-back filter. All criteria are optional.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Exact keyword, case-insensitive
    pub keyword: Option<String>,
    /// Records whose brand URL contains this brand's domain
    pub brand_url: Option<String>,
    pub limit: Option<usize>,
}
