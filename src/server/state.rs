//! Application state shared across all request handlers.
//!
//! The state is built once at startup and cloned into each handler through Axum's
//! state extraction. `DatabaseConnection` is a pool handle, so clones share it.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Whether appointment updates compare the path id with the body id.
    pub appointment_id_check: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, appointment_id_check: bool) -> Self {
        Self {
            db,
            appointment_id_check,
        }
    }
}
