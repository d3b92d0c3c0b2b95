use serde::{Deserialize, Serialize};

/// Target kafka REST proxy for the publish path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Proxy hostname; also sent as the explicit `Host` header.
    pub host: String,
    /// Proxy port; left out of the URL when it is the default HTTP port.
    pub port: u16,
    /// Topic to produce into.
    pub topic: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8082,
            topic: "blocks".into(),
        }
    }
}

impl PublishConfig {
    /// Produce-endpoint URL for the configured topic.
    pub fn topic_url(&self) -> String {
        if self.port == 80 {
            format!("http://{}/topics/{}", self.host, self.topic)
        } else {
            format!("http://{}:{}/topics/{}", self.host, self.port, self.topic)
        }
    }
}
