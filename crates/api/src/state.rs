use std::sync::Arc;

use crate::config::ServerConfig;
use crate::media::MediaStorage;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheap to clone: everything is behind an `Arc` or is a pool handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: campus_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Upload target for `POST /admin/media`.
    pub media: Arc<dyn MediaStorage>,
}
