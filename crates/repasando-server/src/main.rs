//! # Repasando Server
//!
//! Main entry point for the Repasando user service.

use repasando_config::{AppConfig, ConfigLoader, LoggingConfig};
use repasando_core::RepasandoResult;
use repasando_server::{init_logging, startup, AppBuilder};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.into_config(),
        Err(e) => {
            init_logging(&LoggingConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    startup::print_banner();

    info!("Starting Repasando server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> RepasandoResult<()> {
    info!("Environment: {}", config.app.environment);

    let app = AppBuilder::new().with_config(config).build().await?;
    startup::print_startup_info(&app.config().server.addr());

    app.run().await
}
