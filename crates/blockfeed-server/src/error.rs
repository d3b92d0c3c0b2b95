use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blockfeed_history::HistoryError;
use blockfeed_publish::PublishError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("history error: {0}")]
    History(#[from] HistoryError),

    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// HTTP status this error surfaces as.
    ///
    /// A start before retained history is the caller asking for pruned
    /// data, rendered as 410 Gone; store and publish failures are server
    /// errors.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::History(HistoryError::InvalidRange { .. }) => StatusCode::BAD_REQUEST,
            Self::History(HistoryError::BeforeRetainedHistory { .. }) => StatusCode::GONE,
            Self::History(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Publish(_) => StatusCode::BAD_GATEWAY,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request failed");
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_errors_map_to_client_or_server_status() {
        let before = ServerError::History(HistoryError::BeforeRetainedHistory {
            start: 50,
            oldest: 100,
        });
        assert_eq!(before.status(), StatusCode::GONE);

        let invalid = ServerError::History(HistoryError::InvalidRange { start: 9, end: 3 });
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let unavailable =
            ServerError::History(HistoryError::StoreUnavailable("down".into()));
        assert_eq!(unavailable.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn publish_errors_are_gateway_failures() {
        let error = ServerError::Publish(PublishError::BadStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://proxy/topics/blocks".into(),
        });
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
    }
}
