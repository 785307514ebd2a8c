//! Server bootstrap and graceful shutdown.

use std::net::SocketAddr;

use thiserror::Error;
use tracing::info;

use crate::routes::create_router;
use crate::state::AppState;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bind host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Server runtime error.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Bind or serve failure.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Create a new server.
    #[must_use]
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Bind and serve until a shutdown signal arrives, then drain
    /// in-flight requests.
    pub async fn run(self) -> Result<(), ServerError> {
        let environment = self.state.config.environment;
        let cors_origin = self.state.config.cors_origin.clone();
        let router = create_router(self.state);

        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!(
            addr = %addr,
            env = environment.as_str(),
            cors_origin = %cors_origin,
            "Server started"
        );

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        info!("Server closed");
        Ok(())
    }
}

/// Resolve when SIGTERM or ctrl-c arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, shutting down gracefully");
}
