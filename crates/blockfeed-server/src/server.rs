use std::sync::Arc;

use blockfeed_history::HistoryReader;
use blockfeed_publish::Publisher;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Blockfeed export server.
pub struct BlockfeedServer {
    config: ServerConfig,
    state: AppState,
}

impl BlockfeedServer {
    pub fn new(config: ServerConfig, history: Arc<dyn HistoryReader>) -> Self {
        let publisher = Publisher::new(config.publish.clone());
        Self {
            state: AppState::new(history, publisher),
            config,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!("blockfeed server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
