use anyhow::Result;
use birth_relay::{config, logging::Logger, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let sink = match Logger::new(&config.logging).and_then(Logger::install) {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("Failed to set up logging: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting birth-relay server with log level: {} (sink: {:?})",
        config.logging.level, sink
    );
    info!("Configuration loaded successfully");

    // Start the server
    server::run(config).await?;

    Ok(())
}
