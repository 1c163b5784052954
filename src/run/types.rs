//! Batch result types.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::resolver::{RankOutcome, ScannedLink};
use crate::storage::insert::CHECKED_AT_FORMAT;

/// Result of checking one keyword of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordResult {
    pub keyword: String,
    pub outcome: RankOutcome,
    pub location: Option<String>,
    pub checked_at: DateTime<Utc>,
    /// Diagnostic SERP links scanned for this keyword
    pub scanned: Vec<ScannedLink>,
    /// Row id of the persisted record
    pub record_id: i64,
}

impl KeywordResult {
    /// `checked_at` in the stored display format.
    pub fn checked_at_display(&self) -> String {
        self.checked_at.format(CHECKED_AT_FORMAT).to_string()
    }
}

/// Results of a rank check batch.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// One entry per keyword, in input order
    pub results: Vec<KeywordResult>,
    pub found: usize,
    pub not_found: usize,
    pub errors: usize,
    /// Path to the SQLite database containing the history
    pub db_path: PathBuf,
    pub elapsed_seconds: f64,
}

impl CheckReport {
    pub fn new(results: Vec<KeywordResult>, db_path: PathBuf, elapsed: Duration) -> Self {
        let mut found = 0;
        let mut not_found = 0;
        let mut errors = 0;
        for result in &results {
            match result.outcome {
                RankOutcome::Found { .. } => found += 1,
                RankOutcome::NotFound => not_found += 1,
                RankOutcome::ApiError { .. } => errors += 1,
            }
        }
        Self {
            results,
            found,
            not_found,
            errors,
            db_path,
            elapsed_seconds: elapsed.as_secs_f64(),
        }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }
}
