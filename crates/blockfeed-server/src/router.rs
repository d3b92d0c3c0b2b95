use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all blockfeed endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/blocks", get(handler::blocks_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
