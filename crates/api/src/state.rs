use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Handlers hold no other state between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Each repository call acquires a connection
    /// for a single statement and releases it when the statement completes.
    pub pool: tracker_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
