//! # Blogforge Config
//!
//! Environment-sourced configuration with startup validation.
//!
//! Configuration is loaded once at startup, validated as a whole, and
//! shared immutably for the life of the process. Every invalid or
//! missing value is reported in a single aggregate error so operators
//! fix the deployment in one pass.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::env;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default listen port.
const DEFAULT_PORT: u16 = 5000;
/// Default allowed CORS origin.
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
/// Default rate-limit window.
const DEFAULT_RATE_LIMIT_WINDOW_MS: u64 = 60_000;
/// Default maximum requests per window.
const DEFAULT_RATE_LIMIT_MAX: u32 = 10;
/// Default chat-completion endpoint base URL.
const DEFAULT_UPSTREAM_URL: &str = "https://router.huggingface.co/v1";
/// Default model identifier.
const DEFAULT_UPSTREAM_MODEL: &str = "Qwen/Qwen2.5-72B-Instruct";

/// Configuration load error aggregating every failed key.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more environment values were missing or invalid.
    #[error("Configuration errors:\n{}", errors.join("\n"))]
    Invalid {
        /// One message per failed key.
        errors: Vec<String>,
    },
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development.
    Development,
    /// Production deployment.
    Production,
    /// Test runs.
    Test,
}

impl Environment {
    /// String form used in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }

    /// Whether this is a production deployment.
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(format!("Invalid value for APP_ENV: {other}")),
        }
    }
}

/// Minimum severity emitted by the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Debug and above.
    Debug,
    /// Info and above.
    Info,
    /// Warn and above.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// String form accepted by the tracing env filter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("Invalid value for LOG_LEVEL: {other}")),
        }
    }
}

/// Process-wide configuration, immutable after startup validation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port.
    pub port: u16,
    /// Deployment environment.
    pub environment: Environment,
    /// Bearer credential for the upstream API. Never logged.
    pub api_key: SecretString,
    /// The single origin allowed by CORS.
    pub cors_origin: String,
    /// Fixed rate-limit window length.
    pub rate_limit_window: Duration,
    /// Maximum requests per client per window.
    pub rate_limit_max: u32,
    /// Minimum log severity.
    pub log_level: LogLevel,
    /// Base URL of the chat-completion endpoint.
    pub upstream_url: String,
    /// Model identifier sent with every completion request.
    pub upstream_model: String,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming every missing or invalid
    /// value at once.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Exists so tests can exercise validation without mutating process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();

        let port = match lookup("PORT") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => {
                    errors.push(format!("Invalid value for PORT: {raw}"));
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        let environment = match lookup("APP_ENV") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                errors.push(e);
                Environment::Development
            }),
            None => Environment::Development,
        };

        let api_key = match lookup("HUGGINGFACE_API_KEY") {
            Some(raw) if !raw.is_empty() => SecretString::new(raw),
            Some(_) => {
                errors.push("Invalid value for HUGGINGFACE_API_KEY: empty".to_string());
                SecretString::new(String::new())
            }
            None => {
                errors.push(
                    "Missing required environment variable: HUGGINGFACE_API_KEY".to_string(),
                );
                SecretString::new(String::new())
            }
        };

        let cors_origin = lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let rate_limit_window = match lookup("RATE_LIMIT_WINDOW_MS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    errors.push(format!("Invalid value for RATE_LIMIT_WINDOW_MS: {raw}"));
                    Duration::from_millis(DEFAULT_RATE_LIMIT_WINDOW_MS)
                }
            },
            None => Duration::from_millis(DEFAULT_RATE_LIMIT_WINDOW_MS),
        };

        let rate_limit_max = match lookup("RATE_LIMIT_MAX") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(max) if max > 0 => max,
                _ => {
                    errors.push(format!("Invalid value for RATE_LIMIT_MAX: {raw}"));
                    DEFAULT_RATE_LIMIT_MAX
                }
            },
            None => DEFAULT_RATE_LIMIT_MAX,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                errors.push(e);
                LogLevel::Info
            }),
            None => LogLevel::Info,
        };

        let upstream_url =
            lookup("UPSTREAM_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        let upstream_model =
            lookup("UPSTREAM_MODEL").unwrap_or_else(|| DEFAULT_UPSTREAM_MODEL.to_string());

        if errors.is_empty() {
            Ok(Self {
                port,
                environment,
                api_key,
                cors_origin,
                rate_limit_window,
                rate_limit_max,
                log_level,
                upstream_url,
                upstream_model,
            })
        } else {
            Err(ConfigError::Invalid { errors })
        }
    }
}
