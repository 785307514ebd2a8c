//! Logging initialization.

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Service name attached to every log line.
    pub service_name: String,
    /// Minimum level, unless overridden by `RUST_LOG`.
    pub level: String,
    /// Emit JSON lines; plain text when disabled (local debugging).
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            service_name: "blogforge".to_string(),
            level: "info".to_string(),
            json: true,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set the minimum level.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Toggle JSON output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Logging initialization error.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The global subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Install the process-wide subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this
/// twice fails; initialize once at startup and pass loggers down by
/// construction.
///
/// # Errors
/// Returns [`TelemetryError::Init`] if a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    if config.json {
        let layer = fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(layer.with_filter(filter))
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_filter(filter))
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    tracing::info!(service = %config.service_name, level = %config.level, "Logging initialized");

    Ok(())
}
