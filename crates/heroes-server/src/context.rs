//! Application context shared by all route handlers via Axum state.

use heroes_db::pool::DbPool;

/// Application context shared by all request handlers (via Axum state).
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppContext {
    /// Database connection pool.
    pub db: DbPool,
}

impl AppContext {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}
