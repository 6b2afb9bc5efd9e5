//! Gateway server implementation.

use aiplat_core::GatewayConfig;
use tokio::net::TcpListener;
use tokio::signal;

use crate::error::ServerError;
use crate::routes;
use crate::state::AppState;

/// The HTTP gateway server.
pub struct GatewayServer {
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// Get the configured bind address.
    pub fn bind_addr(&self) -> &str {
        &self.config.server.bind
    }

    /// Start the server and run until SIGINT or SIGTERM.
    pub async fn run(&self) -> Result<(), ServerError> {
        let addr = self.bind_addr();
        let state = AppState::new(&self.config);
        let app = routes::create_router(state);

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::StartupFailed(format!("Failed to bind to {}: {}", addr, e)))?;

        tracing::info!(
            address = %addr,
            max_prompt_length = self.config.guardrails.max_prompt_length,
            max_cost_usd = self.config.guardrails.max_cost_usd,
            banned_terms = self.config.guardrails.banned_terms.len(),
            "AI Platform gateway listening"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::StartupFailed(e.to_string()))?;

        tracing::info!("Shutting down gracefully");
        Ok(())
    }
}

/// Wait for a shutdown signal (SIGTERM or SIGINT / Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl+C)");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM");
        }
    }
}
