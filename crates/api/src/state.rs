use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally and the
/// config sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once at startup.
    pub pool: inventario_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
