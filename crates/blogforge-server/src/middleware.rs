//! Cross-cutting request middleware.
//!
//! Composed at router construction; see [`crate::routes::create_router`]
//! for the ordering.

use std::any::Any;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use blogforge_config::AppConfig;
use blogforge_core::{trace::TRACE_ID_HEADER, TraceContext};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Maximum accepted request body, applied before JSON parsing.
pub const BODY_LIMIT_BYTES: usize = 10 * 1024;

/// Assign a trace id: reuse the inbound header when present, else
/// generate one. The id is stored in request extensions and echoed on
/// the response.
pub async fn trace_id_middleware(mut request: Request, next: Next) -> Response {
    let ctx = request
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or_else(TraceContext::new, TraceContext::from_value);

    let trace_id = ctx.trace_id.clone();
    request.extensions_mut().insert(ctx);

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }

    response
}

/// Log one line per completed request: method, path, status, duration,
/// trace id.
pub async fn access_log_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let trace_id = request
        .extensions()
        .get::<TraceContext>()
        .map(|ctx| ctx.trace_id.clone())
        .unwrap_or_default();

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    info!(
        trace_id = %trace_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = duration.as_millis() as u64,
        "HTTP request"
    );

    response
}

/// Apply restrictive security headers to every response.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("no-referrer"),
    );

    response
}

/// CORS layer: the configured origin only, GET/POST, credentials
/// allowed.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(86_400));

    if let Ok(origin) = config.cors_origin.parse::<HeaderValue>() {
        layer = layer.allow_origin(origin);
    } else {
        warn!(origin = %config.cors_origin, "Invalid CORS origin, denying cross-origin requests");
    }

    layer
}

/// Fixed-window rate limiting, applied to API routes only.
///
/// Over-limit requests are answered with the 429 envelope before
/// reaching the controller.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request);

    if state.limiter.allow(&key) {
        next.run(request).await
    } else {
        let request_id = request
            .extensions()
            .get::<TraceContext>()
            .map(|ctx| ctx.trace_id.clone());

        warn!(client = %key, "Rate limit exceeded");
        ApiError::too_many_requests(request_id).into_response()
    }
}

/// Client identity for rate limiting: first `x-forwarded-for` hop,
/// then `x-real-ip`, then the socket peer address.
fn client_key(request: &Request) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return forwarded.to_string();
    }

    if let Some(real_ip) = request
        .headers()
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return real_ip.to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "unknown".to_string(), |info| info.0.ip().to_string())
}

/// Panic response builder for the outermost error boundary.
#[derive(Clone)]
pub struct PanicHandler {
    /// Include the panic message in the log line (non-production only).
    include_detail: bool,
}

impl ResponseForPanic for PanicHandler {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(
        &mut self,
        err: Box<dyn Any + Send + 'static>,
    ) -> http::Response<Self::ResponseBody> {
        if self.include_detail {
            let detail = err
                .downcast_ref::<String>()
                .cloned()
                .or_else(|| err.downcast_ref::<&str>().map(|s| (*s).to_string()))
                .unwrap_or_else(|| "unknown panic".to_string());
            error!(panic = %detail, "Unhandled panic while serving request");
        } else {
            error!("Unhandled panic while serving request");
        }

        ApiError::internal().into_response()
    }
}

/// Outermost boundary: any panic becomes a generic 500 envelope with no
/// internal detail leaked to the client.
pub fn catch_panic_layer(include_detail: bool) -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(PanicHandler { include_detail })
}
