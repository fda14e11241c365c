use std::sync::Arc;

use lenswatch_feed::FeedClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable and holds no mutable data -- every request runs
/// an independent pipeline pass against a fresh feed fetch.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the upstream utilization feed.
    pub feed: Arc<FeedClient>,
}
