use std::sync::Arc;

use atlas_db::Database;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database capability. Production wires in `PgDatabase`; tests supply a stub.
    pub db: Arc<dyn Database>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
