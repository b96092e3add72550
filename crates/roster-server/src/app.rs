//! HTTP application lifecycle.

use crate::di::build_module;
use axum::Router;
use roster_config::AppConfig;
use roster_core::{RosterError, RosterResult};
use roster_rest::create_router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// A bound, not yet serving, HTTP application.
pub struct App {
    listener: TcpListener,
    router: Router,
}

impl App {
    /// Wires the module and router, then binds the configured address.
    pub async fn bind(config: &AppConfig) -> RosterResult<Self> {
        let module = build_module();
        let router = create_router(module.as_ref(), &config.server);

        let addr = config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| RosterError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        Ok(Self { listener, router })
    }

    /// Returns the address the listener is bound to.
    pub fn local_addr(&self) -> RosterResult<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(|e| RosterError::Internal(format!("Failed to read local address: {}", e)))
    }

    /// Serves requests until `shutdown` resolves, then drains in-flight requests.
    pub async fn run<F>(self, shutdown: F) -> RosterResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RosterError::Internal(format!("REST server error: {}", e)))?;

        info!("Server shutdown complete");
        Ok(())
    }
}
