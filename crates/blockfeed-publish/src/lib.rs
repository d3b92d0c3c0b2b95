//! Outbound publishing for blockfeed.
//!
//! Serializes an assembled block batch and forwards it as a single message
//! to a kafka REST proxy topic endpoint over HTTP. Exactly one POST per
//! call: no retries, no backoff, no batching across calls.

pub mod config;
pub mod error;
pub mod publisher;

pub use config::PublishConfig;
pub use error::PublishError;
pub use publisher::{PublishAck, Publisher, KAFKA_JSON_CONTENT_TYPE};
