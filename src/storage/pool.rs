//! Database connection pool management.
//!
//! This module initializes and configures the SQLite connection pool with:
//! - WAL mode enabled
//! - Automatic database file creation

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use log::{debug, error};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

use super::migrations::run_migrations;

/// Shared handle to the history database.
pub type DbPool = Arc<SqlitePool>;

/// Initializes and returns a database connection pool for `db_path`.
///
/// Creates the database file if it doesn't exist and enables WAL mode.
pub async fn init_db_pool_with_path(db_path: &Path) -> Result<DbPool, DatabaseError> {
    let db_path_str = db_path.to_string_lossy().to_string();
    match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(&db_path_str)
    {
        Ok(_) => debug!("Database file created: {}", db_path_str),
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("Database file already exists: {}", db_path_str)
        }
        Err(e) => {
            error!("Failed to create database file: {e}");
            return Err(DatabaseError::FileCreationError(e.to_string()));
        }
    }

    let pool = SqlitePool::connect(&format!("sqlite:{}", db_path_str))
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })?;

    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await
        .map_err(|e| {
            error!("Failed to set WAL mode: {e}");
            DatabaseError::SqlError(e)
        })?;

    Ok(Arc::new(pool))
}

/// Opens the history store: pool plus migrations applied.
pub async fn open_store(db_path: &Path) -> Result<DbPool, DatabaseError> {
    let pool = init_db_pool_with_path(db_path).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_store_creates_file_and_schema() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("ranks.db");

        let pool = open_store(&db_path).await.unwrap();
        assert!(db_path.exists());

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='ranks'",
        )
        .fetch_one(pool.as_ref())
        .await
        .unwrap();
        assert_eq!(tables, 1);
    }

    #[tokio::test]
    async fn test_open_store_twice_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("ranks.db");

        let first = open_store(&db_path).await.unwrap();
        first.close().await;
        let second = open_store(&db_path).await.unwrap();

        let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
            .fetch_one(second.as_ref())
            .await
            .unwrap();
        assert_eq!(applied, 3);
    }

    #[tokio::test]
    async fn test_open_store_rejects_unversioned_ranks_table() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("legacy.db");

        // Shape written by the standalone script: no _sqlx_migrations table
        let pool = init_db_pool_with_path(&db_path).await.unwrap();
        sqlx::query(
            "CREATE TABLE ranks (id INTEGER PRIMARY KEY AUTOINCREMENT, brand_url TEXT, \
             keyword TEXT, rank TEXT, country TEXT, lang TEXT, location TEXT, \
             checked_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)",
        )
        .execute(pool.as_ref())
        .await
        .unwrap();
        pool.close().await;

        let result = open_store(&db_path).await;
        assert!(matches!(result, Err(DatabaseError::MigrationError(_))));
    }

    #[tokio::test]
    async fn test_init_pool_fails_for_missing_directory() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("missing").join("ranks.db");
        let result = init_db_pool_with_path(&db_path).await;
        assert!(matches!(result, Err(DatabaseError::FileCreationError(_))));
    }
}
