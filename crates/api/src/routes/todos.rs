//! Handlers for the todo collection (`/api`) and item (`/api/{id}`) routes.
//!
//! Each handler issues exactly one statement through [`TodoRepo`]. Update
//! and delete treat a zero affected-row count as "not found" instead of
//! running an existence check first.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Serialize;
use todos_core::error::CoreError;
use todos_core::types::DbId;
use todos_db::models::todo::{Todo, TodoPayload};
use todos_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(list_todos).post(create_todo))
        .route("/api/{id}", put(update_todo).delete(delete_todo))
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct TodoList {
    todos: Vec<Todo>,
}

#[derive(Serialize)]
struct CreatedTodo {
    id: DbId,
    title: String,
}

#[derive(Serialize)]
struct UpdatedTodo {
    id: DbId,
    title: String,
    completed: i64,
}

#[derive(Serialize)]
struct DeletedMessage {
    message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api
///
/// List all todos, ordered by id ascending.
async fn list_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let todos = TodoRepo::list_all(&state.pool).await?;

    Ok(Json(TodoList { todos }))
}

/// POST /api
///
/// Create a todo from the body's `title`; `completed` starts at 0.
async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(bad_body)?;
    let title = require_title(&input)?;

    let id = TodoRepo::create(&state.pool, &title).await?;

    tracing::info!(id, "Todo created");

    Ok((StatusCode::CREATED, Json(CreatedTodo { id, title })))
}

/// PUT /api/{id}
///
/// Whole-row overwrite of `title` and `completed` for the addressed todo.
async fn update_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_item_id(&raw_id).ok_or(AppError::RouteNotFound)?;
    let Json(input) = payload.map_err(bad_body)?;
    let title = require_title(&input)?;
    let completed = require_completed(&input)?;

    let matched = TodoRepo::update(&state.pool, id, &title, completed).await?;
    if !matched {
        return Err(CoreError::NotFound { entity: "Todo", id }.into());
    }

    tracing::info!(id, "Todo updated");

    Ok(Json(UpdatedTodo {
        id,
        title,
        completed,
    }))
}

/// DELETE /api/{id}
async fn delete_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_item_id(&raw_id).ok_or(AppError::RouteNotFound)?;

    let matched = TodoRepo::delete(&state.pool, id).await?;
    if !matched {
        return Err(CoreError::NotFound { entity: "Todo", id }.into());
    }

    tracing::info!(id, "Todo deleted");

    Ok(Json(DeletedMessage {
        message: "Todo deleted successfully",
    }))
}

// ---------------------------------------------------------------------------
// Parsing and validation
// ---------------------------------------------------------------------------

/// Parse an item-route path segment into an id.
///
/// An item route is the collection root followed by one or more decimal
/// digits and nothing else; anything non-numeric is an unmatched route,
/// not a bad request.
fn parse_item_id(raw: &str) -> Option<DbId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

/// `title` must be present and non-empty, for create and update alike.
fn require_title(input: &TodoPayload) -> Result<String, AppError> {
    match input.title.as_deref() {
        Some(title) if !title.is_empty() => Ok(title.to_string()),
        _ => Err(CoreError::Validation("Title is required".into()).into()),
    }
}

/// `completed` must be present and be the integer 0 or 1.
fn require_completed(input: &TodoPayload) -> Result<i64, AppError> {
    match input.completed {
        Some(flag @ (0 | 1)) => Ok(flag),
        Some(_) => Err(CoreError::Validation("Completed must be 0 or 1".into()).into()),
        None => Err(CoreError::Validation("Completed is required".into()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_item_id_accepts_digit_sequences() {
        assert_eq!(parse_item_id("1"), Some(1));
        assert_eq!(parse_item_id("42"), Some(42));
        assert_eq!(parse_item_id("007"), Some(7));
    }

    #[test]
    fn parse_item_id_rejects_non_digit_segments() {
        assert_eq!(parse_item_id(""), None);
        assert_eq!(parse_item_id("abc"), None);
        assert_eq!(parse_item_id("12abc"), None);
        assert_eq!(parse_item_id("-1"), None);
        assert_eq!(parse_item_id("1.5"), None);
    }

    #[test]
    fn parse_item_id_rejects_overflowing_sequences() {
        assert_eq!(parse_item_id("99999999999999999999999999"), None);
    }

    #[test]
    fn require_title_rejects_missing_and_empty() {
        assert!(require_title(&TodoPayload::default()).is_err());
        assert!(require_title(&TodoPayload {
            title: Some(String::new()),
            completed: None,
        })
        .is_err());

        let ok = require_title(&TodoPayload {
            title: Some("buy milk".into()),
            completed: None,
        });
        assert_eq!(ok.unwrap(), "buy milk");
    }

    #[test]
    fn require_completed_accepts_only_zero_and_one() {
        let payload = |completed| TodoPayload {
            title: None,
            completed,
        };

        assert!(require_completed(&payload(None)).is_err());
        assert!(require_completed(&payload(Some(2))).is_err());
        assert!(require_completed(&payload(Some(-1))).is_err());
        assert_eq!(require_completed(&payload(Some(0))).unwrap(), 0);
        assert_eq!(require_completed(&payload(Some(1))).unwrap(), 1);
    }
}
