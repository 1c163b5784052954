//! Batch orchestration.
//!
//! A batch checks every keyword of a `CheckConfig` in order: resolve, record,
//! pause, next keyword. A keyword that fails with an API error is recorded
//! like any other outcome and the batch continues.

mod input;
mod types;

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use sqlx::SqlitePool;

use crate::app::log_progress;
use crate::config::CheckConfig;
use crate::initialization::init_client;
use crate::resolver::{RankOutcome, RankQuery, RankResolver};
use crate::search::{SearchProvider, SerpApiClient};
use crate::storage::{open_store, record_check};

pub use input::{parse_keywords, validate_config};
pub use types::{CheckReport, KeywordResult};

/// Runs a rank check batch with the provided configuration.
///
/// Validates the input, opens (and migrates) the history database, builds
/// the SerpApi client from the configured key and checks every keyword.
///
/// # Errors
///
/// Returns an error if the input is invalid (before any search request is
/// made), or if the database or HTTP client cannot be initialized or a
/// record cannot be written.
///
/// # Example
///
/// ```no_run
/// use rank_tracker::{run_check, CheckConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = CheckConfig {
///     brand_url: "digitalpiloto.com".to_string(),
///     keywords: vec!["seo agency".to_string()],
///     api_key: std::env::var("SERPAPI_KEY")?,
///     ..Default::default()
/// };
/// let report = run_check(config).await?;
/// println!("{} found, {} not found", report.found, report.not_found);
/// # Ok(())
/// # }
/// ```
pub async fn run_check(config: CheckConfig) -> Result<CheckReport> {
    validate_config(&config)?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let provider = SerpApiClient::new(client, config.api_key.clone())
        .with_endpoint(config.endpoint.clone())
        .with_engine(config.engine.clone());
    let resolver = RankResolver::new(provider).with_page_delay(config.page_delay);

    let pool = open_store(&config.db_path)
        .await
        .context("Failed to initialize history database")?;

    let report = run_check_with(&config, &resolver, &pool).await;
    pool.close().await;
    report
}

/// Checks every keyword of `config` with `resolver`, recording each outcome in `pool`.
///
/// The caller owns initialization; this is the loop itself.
pub async fn run_check_with<P: SearchProvider>(
    config: &CheckConfig,
    resolver: &RankResolver<P>,
    pool: &SqlitePool,
) -> Result<CheckReport> {
    validate_config(config)?;

    let keywords: Vec<&str> = config
        .keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();
    let total = keywords.len();
    let start_time = Instant::now();
    match config.location.as_deref() {
        Some(location) => info!("Targeting location: {}", location),
        None => info!("Targeting country: {}", config.country),
    }

    let mut results = Vec::with_capacity(total);
    for (index, keyword) in keywords.into_iter().enumerate() {
        if index > 0 && !config.keyword_delay.is_zero() {
            tokio::time::sleep(config.keyword_delay).await;
        }

        info!("[{}/{}] Checking: {}", index + 1, total, keyword);
        let query = RankQuery {
            keyword: keyword.to_string(),
            brand_url: config.brand_url.trim().to_string(),
            country: config.country.clone(),
            language: config.language.clone(),
            location: config.location.clone(),
        };

        let resolution = resolver
            .resolve_with(&query, config.max_results, config.page_size)
            .await?;
        if let RankOutcome::ApiError { message } = &resolution.outcome {
            warn!("SerpApi error for '{}': {}", keyword, message);
        }

        let checked_at = Utc::now();
        let record_id = record_check(pool, &query, &resolution.outcome, checked_at)
            .await
            .with_context(|| format!("Failed to record result for '{keyword}'"))?;

        results.push(KeywordResult {
            keyword: query.keyword,
            outcome: resolution.outcome,
            location: query.location,
            checked_at,
            scanned: resolution.scanned,
            record_id,
        });

        log_progress(start_time, index + 1, total);
    }

    let report = CheckReport::new(results, config.db_path.clone(), start_time.elapsed());
    info!(
        "Rank check completed: {} found, {} not found, {} errors",
        report.found, report.not_found, report.errors
    );
    Ok(report)
}
