//! Export types and options.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::storage::HistoryFilter;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (flat, one row per check, for Excel/Sheets)
    Csv,
    /// JSONL format (one JSON object per check)
    Jsonl,
}

/// Options for exporting history.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Database path
    pub db_path: PathBuf,
    /// Output file path (or stdout if None)
    pub output: Option<PathBuf>,
    /// Export format
    pub format: ExportFormat,
    /// Which records to export
    pub filter: HistoryFilter,
}
