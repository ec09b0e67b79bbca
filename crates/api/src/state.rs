/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: the pool is an `Arc` internally. Handlers receive the
/// pool through this injection point rather than any module-level singleton,
/// so tests can supply their own database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: todos_db::DbPool,
}
