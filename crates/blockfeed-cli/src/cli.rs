use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line interface for the blockfeed export service.
#[derive(Parser)]
#[command(
    name = "blockfeed",
    version,
    about = "Range-validated ledger export and kafka publish service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Path to a TOML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Bind address override, e.g. 127.0.0.1:8000.
        #[arg(long)]
        bind: Option<SocketAddr>,
        /// Kafka proxy host override.
        #[arg(long)]
        kafka_host: Option<String>,
        /// Kafka proxy port override.
        #[arg(long)]
        kafka_port: Option<u16>,
        /// Kafka topic override.
        #[arg(long)]
        kafka_topic: Option<String>,
        /// JSON fixture of history rows to serve from memory.
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
}
