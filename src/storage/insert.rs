//! Rank check insertion.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::resolver::{RankOutcome, RankQuery};

use super::models::RankStatus;

/// Format of `checked_at`; identical to SQLite's `CURRENT_TIMESTAMP`, so text
/// ordering is chronological for old and new rows alike.
pub const CHECKED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appends one record for a completed check and returns its row id.
///
/// Every outcome is recorded, including not-found and API errors.
pub async fn record_check(
    pool: &SqlitePool,
    query: &RankQuery,
    outcome: &RankOutcome,
    checked_at: DateTime<Utc>,
) -> Result<i64, DatabaseError> {
    let (status, position, page, matched_url, error_message) = match outcome {
        RankOutcome::Found {
            position,
            page,
            matched_url,
        } => (
            RankStatus::Found,
            Some(i64::from(*position)),
            Some(i64::from(*page)),
            Some(matched_url.as_str()),
            None,
        ),
        RankOutcome::NotFound => (RankStatus::NotFound, None, None, None, None),
        RankOutcome::ApiError { message } => {
            (RankStatus::ApiError, None, None, None, Some(message.as_str()))
        }
    };

    let result = sqlx::query(
        "INSERT INTO ranks (
            brand_url, keyword, rank, country, lang, location,
            status, position, page, matched_url, error_message, checked_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&query.brand_url)
    .bind(&query.keyword)
    .bind(outcome.display_rank())
    .bind(&query.country)
    .bind(&query.language)
    .bind(query.location.as_deref())
    .bind(status.as_ref())
    .bind(position)
    .bind(page)
    .bind(matched_url)
    .bind(error_message)
    .bind(checked_at.format(CHECKED_AT_FORMAT).to_string())
    .execute(pool)
    .await
    .map_err(DatabaseError::SqlError)?;

    Ok(result.last_insert_rowid())
}
