//! # Blogforge
//!
//! Prompt-to-blog generation gateway: accepts a short topic over HTTP,
//! relays it to a hosted chat-completion model, and returns generated
//! markdown.
//!
//! ## Usage
//!
//! ```bash
//! # Start with the default configuration
//! HUGGINGFACE_API_KEY=hf_... blogforge
//!
//! # Start with environment overrides
//! PORT=8080 LOG_LEVEL=debug HUGGINGFACE_API_KEY=hf_... blogforge
//! ```

use std::sync::Arc;

use blogforge_config::AppConfig;
use blogforge_server::{AppState, Server, ServerConfig};
use blogforge_telemetry::{init_logging, LoggingConfig};
use blogforge_upstream::{ChatCompletionClient, UpstreamConfig};
use tracing::{error, info};

/// Application entry point
#[tokio::main]
async fn main() {
    // Configuration first: logging level comes from it, and a broken
    // deployment should fail before anything else starts.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let logging = LoggingConfig::new("blogforge").with_level(config.log_level.as_str());
    if let Err(e) = init_logging(&logging) {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = config.environment.as_str(),
        "Starting blogforge"
    );

    if let Err(e) = run(config).await {
        error!(error = %e, "Application failed");
        std::process::exit(1);
    }
}

/// Main application logic
async fn run(config: AppConfig) -> Result<(), anyhow::Error> {
    let upstream_config = UpstreamConfig::new(config.api_key.clone())
        .with_api_url(config.upstream_url.clone())
        .with_model(config.upstream_model.clone());
    let upstream = ChatCompletionClient::new(upstream_config)?;

    info!(
        model = %config.upstream_model,
        upstream = %config.upstream_url,
        "Upstream client initialized"
    );

    let port = config.port;
    let state = AppState::new(config, Arc::new(upstream));

    let server_config = ServerConfig::new().with_port(port);
    let server = Server::new(server_config, state);

    server.run().await?;

    Ok(())
}
