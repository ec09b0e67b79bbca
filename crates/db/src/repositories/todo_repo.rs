//! Repository for the `todos` table.

use sqlx::SqlitePool;
use todos_core::types::DbId;

use crate::models::todo::Todo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, completed";

/// Provides CRUD operations for todos.
///
/// Update and delete report existence through the affected-row count of a
/// single statement rather than a prior `SELECT`, so there is no
/// check-then-act window.
pub struct TodoRepo;

impl TodoRepo {
    /// List all todos, ordered by id ascending.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Insert a new todo with the given title, returning the assigned id.
    ///
    /// `completed` takes its column default of 0.
    pub async fn create(pool: &SqlitePool, title: &str) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query("INSERT INTO todos (title) VALUES (?)")
            .bind(title)
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite `title` and `completed` for the todo with the given id.
    ///
    /// Returns `false` if no row matched.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        title: &str,
        completed: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE todos SET title = ?, completed = ? WHERE id = ?")
            .bind(title)
            .bind(completed)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the todo with the given id.
    ///
    /// Returns `false` if no row matched.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
