// storage/mod.rs
// Rank history store (SQLite)

pub mod insert;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod query;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use insert::record_check;
pub use migrations::run_migrations;
pub use models::{HistoryFilter, RankRecord, RankStatus};
pub use pool::{init_db_pool_with_path, open_store, DbPool};
pub use query::{count_records, query_history, reset_history};
