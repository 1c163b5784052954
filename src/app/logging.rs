//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs progress information about keyword processing.
///
/// # Arguments
///
/// * `start_time` - The start time of the batch
/// * `completed` - Keywords finished so far
/// * `total` - Keywords in the batch
pub fn log_progress(start_time: Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let percent = if total > 0 {
        completed as f64 * 100.0 / total as f64
    } else {
        100.0
    };
    info!(
        "Checked {}/{} keywords ({:.0}%) in {:.1} seconds",
        completed, total, percent, elapsed_secs
    );
}
