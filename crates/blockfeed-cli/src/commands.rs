use std::sync::Arc;

use blockfeed_history::{HistoryFixture, InMemoryHistory};
use blockfeed_server::{BlockfeedServer, ServerConfig};

use crate::cli::{Cli, Command};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve {
            config,
            bind,
            kafka_host,
            kafka_port,
            kafka_topic,
            fixture,
        } => {
            let mut server_config = match config {
                Some(path) => ServerConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
                None => ServerConfig::default(),
            };
            if let Some(bind) = bind {
                server_config.bind_addr = bind;
            }
            if let Some(host) = kafka_host {
                server_config.publish.host = host;
            }
            if let Some(port) = kafka_port {
                server_config.publish.port = port;
            }
            if let Some(topic) = kafka_topic {
                server_config.publish.topic = topic;
            }

            let history = match fixture {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)?;
                    let fixture = HistoryFixture::from_json_str(&raw)?;
                    tracing::info!(
                        path = %path.display(),
                        ledgers = fixture.ledgers.len(),
                        "loaded history fixture"
                    );
                    InMemoryHistory::from_fixture(fixture)
                }
                None => InMemoryHistory::new(),
            };

            let server = BlockfeedServer::new(server_config, Arc::new(history));
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server.serve())?;
            Ok(())
        }
    }
}
