//! # Tessera Server
//!
//! Main entry point: configuration → logging → database → HTTP.

use tessera_config::ConfigLoader;
use tessera_core::telemetry::{init_telemetry, shutdown_telemetry};
use tessera_core::TesseraResult;
use tessera_server::{startup, Application};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // The subscriber may not be installed yet
        eprintln!("Application error: {e}");
        error!("Application error: {}", e);
        shutdown_telemetry();
        std::process::exit(1);
    }
    shutdown_telemetry();
}

async fn run() -> TesseraResult<()> {
    let config = ConfigLoader::from_default_location()?.get().await;

    init_telemetry(&config.observability)?;
    startup::print_banner();
    info!("Starting Tessera server, version {}", env!("CARGO_PKG_VERSION"));

    let app = Application::build(config.clone()).await?;
    startup::print_startup_info(&config);
    app.run().await
}
