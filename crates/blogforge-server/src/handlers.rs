//! HTTP request handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use blogforge_core::{GenerationMeta, GenerationRequest};
use serde::Serialize;
use tracing::warn;

use crate::{
    error::ApiError,
    extractors::{JsonBody, TraceId},
    state::AppState,
};

/// API version reported by the health endpoint.
const API_VERSION: &str = "v1";

/// Success envelope for a generation.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Always `true`.
    pub success: bool,
    /// Generated blog post, markdown.
    pub blog: String,
    /// The sanitized prompt.
    pub prompt: String,
    /// Generation metadata.
    pub meta: GenerationMeta,
}

/// POST /api/v1/blog/generate
pub async fn generate_blog(
    State(state): State<AppState>,
    TraceId(trace_id): TraceId,
    JsonBody(body): JsonBody<GenerationRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    match state.service.generate(&body.prompt, &trace_id).await {
        Ok(result) => Ok(Json(GenerateResponse {
            success: true,
            blog: result.blog,
            prompt: result.prompt,
            meta: result.meta,
        })),
        Err(err) => {
            warn!(
                trace_id = %trace_id,
                code = err.code(),
                message = %err,
                "Blog generation failed"
            );
            Err(ApiError::from_domain(&err, trace_id))
        }
    }
}

/// Health response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status; always `healthy` while the process accepts
    /// connections.
    pub status: &'static str,
    /// ISO-8601 timestamp.
    pub timestamp: String,
    /// API version.
    pub version: &'static str,
    /// Seconds since process start.
    pub uptime: u64,
}

/// GET /health — liveness only, never touches upstream.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: API_VERSION,
        uptime: state.started_at.elapsed().as_secs(),
    })
}

/// Individual readiness checks.
#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    /// Upstream API reachability.
    pub api: bool,
}

/// Readiness response body.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// Whether every check passed.
    pub ready: bool,
    /// Individual check results.
    pub checks: ReadinessChecks,
    /// ISO-8601 timestamp.
    pub timestamp: String,
}

/// GET /ready — probes upstream reachability with a short timeout.
///
/// A failed probe only flips the check to false; it never raises.
pub async fn readiness_check(
    State(state): State<AppState>,
    TraceId(trace_id): TraceId,
) -> Response {
    let api = state.upstream.probe().await;

    if !api {
        warn!(trace_id = %trace_id, check = "api", "Readiness check failed");
    }

    let body = ReadinessResponse {
        ready: api,
        checks: ReadinessChecks { api },
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    let status = if body.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(body)).into_response()
}

/// Fallback for unmatched routes.
pub async fn not_found(TraceId(trace_id): TraceId) -> ApiError {
    ApiError::not_found(trace_id)
}
