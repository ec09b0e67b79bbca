//! Database layer: pool construction, schema initialization, models, and
//! the todo repository.

use sqlx::sqlite::SqlitePoolOptions;

pub mod models;
pub mod repositories;

pub use models::todo::Todo;
pub use repositories::TodoRepo;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Ensure the `todos` table exists.
///
/// Create-if-absent, so it is safe to invoke repeatedly; runs once at
/// startup before any request is served. `AUTOINCREMENT` guarantees ids
/// are monotonically increasing and never reused after a delete.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0
        )",
    )
    .execute(pool)
    .await?;
    tracing::debug!("todos schema ensured");
    Ok(())
}
