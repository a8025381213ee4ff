//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ____                                        __
   / __ \___  ____  ____ __________ _____  ____/ /___
  / /_/ / _ \/ __ \/ __ `/ ___/ __ `/ __ \/ __  / __ \
 / _, _/  __/ /_/ / /_/ (__  ) /_/ / / / / /_/ / /_/ /
/_/ |_|\___/ .___/\__,_/____/\__,_/_/ /_/\__,_/\____/
          /_/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api/users", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!("{}", separator);
}
