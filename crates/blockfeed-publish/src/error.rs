use thiserror::Error;

/// Errors produced by the publish path.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("publish request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("kafka proxy returned {status} for {url}")]
    BadStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("failed to encode block batch: {0}")]
    Encode(#[from] serde_json::Error),
}
