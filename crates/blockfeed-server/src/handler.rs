use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use blockfeed_assemble::assemble;
use blockfeed_history::validate_range;

use crate::error::ServerResult;
use crate::state::AppState;

/// Query parameters for the block-range export endpoint.
#[derive(Debug, Deserialize)]
pub struct BlocksParams {
    #[serde(default)]
    pub ledger_start: i32,
    #[serde(default)]
    pub ledger_end: i32,
    /// External contract keeps this as a string flag; only the literal
    /// `"true"` selects the publish path.
    #[serde(default)]
    pub send_kafka: Option<String>,
}

impl BlocksParams {
    pub fn publish_requested(&self) -> bool {
        self.send_kafka.as_deref() == Some("true")
    }
}

/// Export one inclusive ledger range as nested block documents.
///
/// Validates the range against retained history, runs the three batch
/// loads, assembles the tree, then either returns the documents or
/// forwards them to the kafka proxy and returns the acknowledgment. The
/// first failure aborts the request; no partial responses.
pub async fn blocks_handler(
    State(state): State<AppState>,
    Query(params): Query<BlocksParams>,
) -> ServerResult<Response> {
    let oldest = state.history.oldest_retained_sequence()?;
    validate_range(params.ledger_start, params.ledger_end, oldest)?;

    let ledgers = state
        .history
        .ledgers_in_range(params.ledger_start, params.ledger_end)?;
    let transactions = state
        .history
        .transactions_in_range(params.ledger_start, params.ledger_end)?;
    let operations = state
        .history
        .operations_in_range(params.ledger_start, params.ledger_end)?;

    let blocks = assemble(&ledgers, &transactions, &operations);
    tracing::debug!(
        ledger_start = params.ledger_start,
        ledger_end = params.ledger_end,
        records = blocks.records.len(),
        "assembled block range"
    );

    if params.publish_requested() {
        let ack = state.publisher.publish(&blocks).await?;
        Ok(Json(ack).into_response())
    } else {
        Ok(Json(blocks).into_response())
    }
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
