//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Initialized once after the readiness gate has handed over a migrated database and
/// cloned for each request through Axum's state extraction. `DatabaseConnection` is a
/// pool, so clones share it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool, already migrated
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
