//! Shared test helpers for storage module tests.

use chrono::{TimeZone, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::resolver::{RankOutcome, RankQuery};
use crate::storage::{record_check, run_migrations};

/// Creates an in-memory database pool with migrations applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

pub fn test_query(keyword: &str) -> RankQuery {
    RankQuery {
        keyword: keyword.to_string(),
        brand_url: "https://digitalpiloto.com".to_string(),
        country: "in".to_string(),
        language: "en".to_string(),
        location: Some("India".to_string()),
    }
}

/// Records a check at `2024-01-01 00:00:00 UTC + offset_secs`.
pub async fn record_at(
    pool: &SqlitePool,
    keyword: &str,
    outcome: &RankOutcome,
    offset_secs: i64,
) -> i64 {
    let checked_at = Utc.timestamp_opt(1_704_067_200 + offset_secs, 0).unwrap();
    record_check(pool, &test_query(keyword), outcome, checked_at)
        .await
        .expect("Failed to record check")
}
