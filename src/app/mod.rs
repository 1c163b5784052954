//! Application-level helpers for the check loop and terminal output.

mod logging;
pub mod table;

pub use logging::log_progress;
