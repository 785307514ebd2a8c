//! API error envelope.
//!
//! Every error response is the same JSON shape:
//! `{"success":false,"error":...,"code":...,"requestId":...}`.
//! Domain errors render verbatim; anything else is the generic
//! internal error with no server-side detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blogforge_core::DomainError;
use serde::Serialize;

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub error: String,
    /// Machine-readable code from the domain taxonomy.
    pub code: &'static str,
    /// Trace id of the failed request, when known.
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// An error ready to be rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status to answer with.
    pub status: StatusCode,
    /// Wire code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Trace id of the failed request.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Render a domain error with the given trace id.
    pub fn from_domain(error: &DomainError, trace_id: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(error.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            code: error.code(),
            message: error.to_string(),
            request_id: Some(trace_id.into()),
        }
    }

    /// Client input fault (malformed body, oversized payload).
    pub fn bad_request(message: impl Into<String>, request_id: Option<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "INVALID_PROMPT",
            message: message.into(),
            request_id,
        }
    }

    /// Unmatched route.
    pub fn not_found(request_id: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "NOT_FOUND",
            message: "Endpoint not found".to_string(),
            request_id: Some(request_id.into()),
        }
    }

    /// Local throttle hit.
    pub fn too_many_requests(request_id: Option<String>) -> Self {
        Self {
            status: StatusCode::TOO_MANY_REQUESTS,
            code: "RATE_LIMITED",
            message: "Too many requests, please try again later".to_string(),
            request_id,
        }
    }

    /// Generic internal error; never carries internal detail.
    #[must_use]
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL_ERROR",
            message: "Internal server error".to_string(),
            request_id: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = ErrorEnvelope {
            success: false,
            error: self.message,
            code: self.code,
            request_id: self.request_id,
        };

        (self.status, Json(envelope)).into_response()
    }
}
