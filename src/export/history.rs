//! History export.

use anyhow::{Context, Result};

use crate::storage::{open_store, query_history};

use super::csv::write_history_csv;
use super::jsonl::write_history_jsonl;
use super::output::open_output;
use super::types::{ExportFormat, ExportOptions};

/// Exports stored history in the requested format.
///
/// Returns the number of records exported.
pub async fn export_history(opts: &ExportOptions) -> Result<usize> {
    let pool = open_store(&opts.db_path)
        .await
        .context("Failed to open history database")?;

    let records = query_history(&pool, &opts.filter)
        .await
        .context("Failed to read history")?;

    let output = open_output(opts.output.as_deref())?;
    let count = match opts.format {
        ExportFormat::Csv => write_history_csv(output, &records)?,
        ExportFormat::Jsonl => write_history_jsonl(output, &records)?,
    };

    pool.close().await;
    Ok(count)
}
