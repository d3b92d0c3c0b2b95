use blockfeed_assemble::BlockData;
use reqwest::header::{CONTENT_TYPE, HOST};
use serde::{Deserialize, Serialize};

use crate::config::PublishConfig;
use crate::error::PublishError;

/// Content type for the kafka REST proxy JSON-batch produce format.
pub const KAFKA_JSON_CONTENT_TYPE: &str = "application/vnd.kafka.json.v1+json";

/// Acknowledgment returned to the caller after a successful publish.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishAck {
    pub message: String,
}

impl PublishAck {
    pub fn success() -> Self {
        Self {
            message: "success".into(),
        }
    }
}

/// Single-shot publisher to a kafka REST proxy topic.
pub struct Publisher {
    config: PublishConfig,
    client: reqwest::Client,
}

impl Publisher {
    pub fn new(config: PublishConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    /// Serialize `blocks` and POST it to the configured topic endpoint.
    ///
    /// The response body is drained and discarded; only the status is
    /// inspected. Transport failures and non-success statuses both fail
    /// the call, and no retry is attempted.
    pub async fn publish(&self, blocks: &BlockData) -> Result<PublishAck, PublishError> {
        let url = self.config.topic_url();
        let body = serde_json::to_vec(blocks)?;

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, KAFKA_JSON_CONTENT_TYPE)
            .header(HOST, &self.config.host)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::BadStatus { status, url });
        }
        response.bytes().await?;

        tracing::info!(
            topic = %self.config.topic,
            records = blocks.records.len(),
            "published block range to kafka proxy"
        );
        Ok(PublishAck::success())
    }
}
