// storage/migrations.rs
// Database migration management

use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Applies the embedded migrations in `migrations/`.
///
/// Applied versions are tracked in `_sqlx_migrations`, so running this on an
/// up-to-date database does nothing.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
