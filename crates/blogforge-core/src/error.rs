//! Domain error taxonomy for the generation pipeline.
//!
//! Every failure the pipeline can surface to a caller is one of these
//! variants. Each carries its wire code and HTTP status so the HTTP
//! layer renders errors verbatim instead of re-interpreting them.

use thiserror::Error;

/// Result type for pipeline operations.
pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors produced by the prompt service and the upstream repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The user-supplied prompt failed validation.
    #[error("{message}")]
    InvalidPrompt {
        /// Message naming the violated bound.
        message: String,
    },

    /// The upstream model is cold-starting (HTTP 503 from the provider).
    #[error("Model is loading. Please try again in a few seconds.")]
    ModelLoading,

    /// Throttled, either locally or by the upstream provider.
    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,

    /// The upstream call failed or returned an unusable response.
    #[error("{message}")]
    GenerationFailed {
        /// Error message, taken from the upstream body when parseable.
        message: String,
        /// Upstream HTTP status, if one was received.
        status: Option<u16>,
    },

    /// No route matched the request.
    #[error("Endpoint not found")]
    NotFound,

    /// Unexpected fault; details stay server-side.
    #[error("{message}")]
    Internal {
        /// Error message describing the fault.
        message: String,
    },
}

impl DomainError {
    /// Create an invalid prompt error.
    pub fn invalid_prompt(message: impl Into<String>) -> Self {
        Self::InvalidPrompt {
            message: message.into(),
        }
    }

    /// Create a generation failure with an optional upstream status.
    pub fn generation_failed(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::GenerationFailed {
            message: message.into(),
            status,
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Machine-readable wire code for the error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPrompt { .. } => "INVALID_PROMPT",
            Self::ModelLoading => "MODEL_LOADING",
            Self::RateLimited => "RATE_LIMITED",
            Self::GenerationFailed { .. } => "GENERATION_FAILED",
            Self::NotFound => "NOT_FOUND",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// HTTP status the error renders with.
    ///
    /// `GenerationFailed` mirrors the upstream status when one was
    /// received, else 500.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidPrompt { .. } => 400,
            Self::ModelLoading => 503,
            Self::RateLimited => 429,
            Self::GenerationFailed { status, .. } => status.unwrap_or(500),
            Self::NotFound => 404,
            Self::Internal { .. } => 500,
        }
    }
}
