//! Lexid - dictionary lookup service.
//!
//! Serves a health check, the in-memory word list, and a normalizing
//! proxy for the external dictionary API.

use anyhow::Result;
use lexid::config::Config;
use lexid::server;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Lexid v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    server::run(config).await
}
