use std::net::SocketAddr;

use blockfeed_publish::PublishConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Top-level server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Kafka REST proxy target for the publish path.
    pub publish: PublishConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".parse().unwrap(),
            publish: PublishConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from TOML text; absent keys take defaults.
    pub fn from_toml_str(raw: &str) -> ServerResult<Self> {
        toml::from_str(raw).map_err(|e| ServerError::Config(e.to_string()))
    }
}
