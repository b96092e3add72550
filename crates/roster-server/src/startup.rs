//! Server startup utilities.

use roster_config::AppConfig;
use std::net::SocketAddr;
use tracing::info;

/// Logs where the server can be reached.
pub fn print_startup_info(config: &AppConfig, addr: SocketAddr) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("{} v{} ({})", config.app.name, config.app.version, config.app.environment);
    info!("Users:     http://{}/users", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(&AppConfig::default(), "127.0.0.1:8080".parse().unwrap());
    }
}
