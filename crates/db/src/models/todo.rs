//! Todo entity model and request DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todos_core::types::DbId;

/// A row from the `todos` table.
///
/// `completed` is a boolean-as-integer flag (0 or 1), kept as `i64` so the
/// wire representation matches the stored one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub completed: i64,
}

/// Request body for create and update.
///
/// Both fields are optional at the serde level; validation happens at the
/// action boundary so missing fields produce a 400 with a concrete message
/// instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPayload {
    pub title: Option<String>,
    pub completed: Option<i64>,
}
