//! History read-back and reset.

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use crate::domain::normalize_brand_domain;
use crate::error_handling::DatabaseError;

use super::models::{HistoryFilter, RankRecord, RankStatus};

/// Returns stored checks, newest first.
///
/// Rows written before the outcome columns existed come back with those
/// fields as `None`; their status is recovered from the display rank.
pub async fn query_history(
    pool: &SqlitePool,
    filter: &HistoryFilter,
) -> Result<Vec<RankRecord>, DatabaseError> {
    let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT id, brand_url, keyword, rank, country, lang, location,
                status, position, page, matched_url, error_message, checked_at
         FROM ranks",
    );

    let mut has_where = false;
    if let Some(keyword) = filter.keyword.as_deref() {
        query_builder.push(" WHERE keyword = ");
        query_builder.push_bind(keyword.trim().to_string());
        query_builder.push(" COLLATE NOCASE");
        has_where = true;
    }
    if let Some(brand_url) = filter.brand_url.as_deref() {
        let brand_domain = normalize_brand_domain(brand_url);
        query_builder.push(if has_where { " AND " } else { " WHERE " });
        query_builder.push("lower(brand_url) LIKE ");
        query_builder.push_bind(format!("%{brand_domain}%"));
    }

    query_builder.push(" ORDER BY checked_at DESC, id DESC");

    if let Some(limit) = filter.limit {
        query_builder.push(" LIMIT ");
        query_builder.push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
    }

    let rows = query_builder
        .build()
        .fetch_all(pool)
        .await
        .map_err(DatabaseError::SqlError)?;

    rows.iter().map(record_from_row).collect()
}

fn record_from_row(row: &SqliteRow) -> Result<RankRecord, DatabaseError> {
    let rank: String = row.try_get("rank")?;
    let status: Option<String> = row.try_get("status")?;
    let status = status
        .as_deref()
        .and_then(|s| RankStatus::from_str(s).ok())
        .or_else(|| RankStatus::from_legacy_rank(&rank));
    let position: Option<i64> = row.try_get("position")?;
    let page: Option<i64> = row.try_get("page")?;

    Ok(RankRecord {
        id: row.try_get("id")?,
        brand_url: row.try_get("brand_url")?,
        keyword: row.try_get("keyword")?,
        position: position
            .and_then(|p| u32::try_from(p).ok())
            .or_else(|| rank.trim().parse().ok()),
        rank,
        status,
        page: page.and_then(|p| u32::try_from(p).ok()),
        matched_url: row.try_get("matched_url")?,
        error_message: row.try_get("error_message")?,
        country: row.try_get("country")?,
        language: row.try_get("lang")?,
        location: row.try_get("location")?,
        checked_at: row.try_get("checked_at")?,
    })
}

/// Number of stored checks.
pub async fn count_records(pool: &SqlitePool) -> Result<i64, DatabaseError> {
    sqlx::query_scalar("SELECT COUNT(*) FROM ranks")
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::SqlError)
}

/// Deletes the whole log. Returns the number of records removed.
pub async fn reset_history(pool: &SqlitePool) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM ranks")
        .execute(pool)
        .await
        .map_err(DatabaseError::SqlError)?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::RankOutcome;
    use crate::storage::test_helpers::{create_test_pool, record_at};

    fn found(position: u32, page: u32) -> RankOutcome {
        RankOutcome::Found {
            position,
            page,
            matched_url: "https://www.digitalpiloto.com/services".to_string(),
        }
    }

    #[tokio::test]
    async fn test_record_and_read_back_found() {
        let pool = create_test_pool().await;
        let id = record_at(&pool, "seo agency", &found(2, 1), 0).await;

        let records = query_history(&pool, &HistoryFilter::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, id);
        assert_eq!(record.keyword, "seo agency");
        assert_eq!(record.brand_url, "https://digitalpiloto.com");
        assert_eq!(record.rank, "2");
        assert_eq!(record.status, Some(RankStatus::Found));
        assert_eq!(record.position, Some(2));
        assert_eq!(record.page, Some(1));
        assert_eq!(
            record.matched_url.as_deref(),
            Some("https://www.digitalpiloto.com/services")
        );
        assert_eq!(record.location.as_deref(), Some("India"));
        assert_eq!(record.checked_at, "2024-01-01 00:00:00");
    }

    #[tokio::test]
    async fn test_error_and_not_found_are_recorded() {
        let pool = create_test_pool().await;
        record_at(&pool, "a", &RankOutcome::NotFound, 0).await;
        record_at(
            &pool,
            "b",
            &RankOutcome::ApiError {
                message: "Invalid API key.".to_string(),
            },
            1,
        )
        .await;

        let records = query_history(&pool, &HistoryFilter::default()).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].keyword, "b");
        assert_eq!(records[0].rank, "API Error");
        assert_eq!(records[0].status, Some(RankStatus::ApiError));
        assert_eq!(records[0].error_message.as_deref(), Some("Invalid API key."));
        assert_eq!(records[1].rank, "Not Found");
        assert_eq!(records[1].position, None);
    }

    #[tokio::test]
    async fn test_history_newest_first() {
        let pool = create_test_pool().await;
        record_at(&pool, "middle", &RankOutcome::NotFound, 60).await;
        record_at(&pool, "oldest", &RankOutcome::NotFound, 0).await;
        record_at(&pool, "newest", &RankOutcome::NotFound, 120).await;
        // Same second as "newest": later insert wins the tie
        record_at(&pool, "newest-tie", &RankOutcome::NotFound, 120).await;

        let keywords: Vec<String> = query_history(&pool, &HistoryFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.keyword)
            .collect();
        assert_eq!(keywords, ["newest-tie", "newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn test_history_filters_and_limit() {
        let pool = create_test_pool().await;
        record_at(&pool, "SEO Agency", &found(4, 1), 0).await;
        record_at(&pool, "seo agency", &found(3, 1), 10).await;
        record_at(&pool, "web design", &RankOutcome::NotFound, 20).await;

        let filter = HistoryFilter {
            keyword: Some("seo agency".to_string()),
            ..Default::default()
        };
        assert_eq!(query_history(&pool, &filter).await.unwrap().len(), 2);

        let filter = HistoryFilter {
            brand_url: Some("www.DigitalPiloto.com".to_string()),
            limit: Some(1),
            ..Default::default()
        };
        let records = query_history(&pool, &filter).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].keyword, "web design");

        let filter = HistoryFilter {
            brand_url: Some("other.com".to_string()),
            ..Default::default()
        };
        assert!(query_history(&pool, &filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_legacy_rows_without_optional_columns() {
        let pool = create_test_pool().await;
        // Shape written by the first schema version: no location, no outcome columns
        sqlx::query(
            "INSERT INTO ranks (brand_url, keyword, rank, country, lang, checked_at)
             VALUES ('digitalpiloto.com', 'old found', '7', 'in', 'en', '2023-05-01 10:00:00'),
                    ('digitalpiloto.com', 'old missing', 'Not Found', 'in', 'en', '2023-05-01 09:00:00')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let records = query_history(&pool, &HistoryFilter::default()).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].keyword, "old found");
        assert_eq!(records[0].status, Some(RankStatus::Found));
        assert_eq!(records[0].position, Some(7));
        assert_eq!(records[0].page, None);
        assert_eq!(records[0].location, None);
        assert_eq!(records[1].status, Some(RankStatus::NotFound));
    }

    #[tokio::test]
    async fn test_default_checked_at_matches_format() {
        let pool = create_test_pool().await;
        sqlx::query(
            "INSERT INTO ranks (brand_url, keyword, rank, country, lang) VALUES ('a', 'b', 'Not Found', 'in', 'en')",
        )
        .execute(&pool)
        .await
        .unwrap();
        let records = query_history(&pool, &HistoryFilter::default()).await.unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(
            &records[0].checked_at,
            crate::storage::insert::CHECKED_AT_FORMAT
        )
        .is_ok());
    }

    #[tokio::test]
    async fn test_reset_and_count() {
        let pool = create_test_pool().await;
        record_at(&pool, "a", &RankOutcome::NotFound, 0).await;
        record_at(&pool, "b", &RankOutcome::NotFound, 1).await;
        assert_eq!(count_records(&pool).await.unwrap(), 2);

        assert_eq!(reset_history(&pool).await.unwrap(), 2);
        assert_eq!(count_records(&pool).await.unwrap(), 0);
        assert_eq!(reset_history(&pool).await.unwrap(), 0);
    }
}
