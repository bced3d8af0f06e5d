use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::AssetStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once in the composition root (`main.rs` or the test harness)
/// and passed explicitly; nothing here is a process-wide global. Cheaply
/// cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: menggaris_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Uploaded-image store rooted at the configured upload directory.
    pub assets: AssetStore,
}
