//! Export functionality.
//!
//! This module writes batch results, scanned SERP links and the stored
//! history to CSV, and the history to JSONL.

mod csv;
mod history;
mod jsonl;
mod output;
mod types;

pub use self::csv::{write_history_csv, write_results_csv, write_serp_csv};
pub use history::export_history;
pub use jsonl::write_history_jsonl;
pub use output::open_output;
pub use types::{ExportFormat, ExportOptions};
