//! Error types for the SDK.

use thiserror::Error;

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to SDK callers.
#[derive(Debug, Error)]
pub enum Error {
    /// Client setup failed.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong with the configuration.
        message: String,
    },

    /// The prompt failed the client-side bounds check.
    #[error("{message}")]
    InvalidPrompt {
        /// Message naming the violated bound.
        message: String,
    },

    /// The HTTP request itself failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error envelope.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the envelope, or a fallback naming the status.
        message: String,
        /// Machine-readable code from the envelope.
        code: Option<String>,
        /// Trace id from the envelope, for debugging.
        request_id: Option<String>,
    },

    /// The server answered 2xx but the envelope was malformed.
    #[error("Invalid response from server: {message}")]
    InvalidResponse {
        /// What was wrong with the envelope.
        message: String,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid prompt error.
    pub fn invalid_prompt(message: impl Into<String>) -> Self {
        Self::InvalidPrompt {
            message: message.into(),
        }
    }

    /// Create an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Machine-readable code from the server, when one was given.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Trace id from the server, when one was given.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// HTTP status code, when the server answered.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
