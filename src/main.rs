use anyhow::Context;
use domain_chain_api::{shared::LoggingUtils, AppConfig, HttpServer};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    LoggingUtils::initialize(&config.logging.level, &config.logging.format)
        .context("Failed to initialize logging")?;
    info!("Starting Domain Chain API...");

    for source in config.missing_source_tokens() {
        warn!(source = %source, "Verification source has no bearer token configured");
    }

    let server = HttpServer::new(config)
        .await
        .context("Failed to initialize server")?;

    info!("Server starting on {}", server.config().server_address());
    server.run().await.context("Server error")?;

    Ok(())
}
