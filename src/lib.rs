//! rank_tracker library: keyword rank checking against Google results
//!
//! This library checks where a brand's website ranks in Google organic results
//! (through SerpApi) for a list of keywords, and keeps one record per check in
//! a SQLite history database.
//!
//! # Example
//!
//! ```no_run
//! use rank_tracker::{run_check, CheckConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = CheckConfig {
//!     brand_url: "https://digitalpiloto.com".to_string(),
//!     keywords: vec!["seo agency".to_string(), "ai seo expert".to_string()],
//!     api_key: std::env::var("SERPAPI_KEY")?,
//!     location: Some("Kolkata, West Bengal, India".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! for result in &report.results {
//!     println!("{}: {}", result.keyword, result.outcome.display_rank());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod app;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod location;
pub mod resolver;
mod run;
pub mod search;
pub mod storage;

// Re-export public API
pub use config::{CheckConfig, LogFormat, LogLevel};
pub use resolver::{RankOutcome, RankQuery, RankResolver, Resolution, ScannedLink};
pub use run::{parse_keywords, run_check, run_check_with, validate_config, CheckReport, KeywordResult};
pub use search::{SearchProvider, SerpApiClient};
pub use storage::{open_store, query_history, reset_history, run_migrations, HistoryFilter, RankRecord};
