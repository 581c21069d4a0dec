//! Server startup utilities.

use tessera_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r"
  ______
 /_  __/__  _____________  _________ _
  / / / _ \/ ___/ ___/ _ \/ ___/ __ `/
 / / /  __(__  |__  )  __/ /  / /_/ /
/_/  \___/____/____/\___/_/   \__,_/
    ");
}

/// Prints where the server can be reached.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let base = format!("http://{}", config.server.addr());
    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("Users:       {}/demo/all", base);
    info!("Insurance:   {}/insurance/all", base);
    info!("Health:      {}/health", base);
    info!("API Docs:    {}/api-docs/openapi.json", base);
    info!("File root:   {}", config.files.listing_root);
    info!("{}", separator);
}
