//! Route definitions and middleware composition.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware, state::AppState};

/// Create the application router with the full middleware chain.
///
/// Outermost to innermost: panic boundary, security headers, CORS,
/// trace-id assignment, access logging, body cap, then routing. Rate
/// limiting is a route layer on the API routes only, so health and
/// readiness stay exempt.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/v1/blog/generate", post(handlers::generate_blog))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit_middleware,
        ));

    Router::new()
        // Health endpoints (no rate limiting)
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        // API routes
        .merge(api_routes)
        // Unmatched routes
        .fallback(handlers::not_found)
        // Apply middleware
        .layer(DefaultBodyLimit::max(middleware::BODY_LIMIT_BYTES))
        .layer(axum::middleware::from_fn(middleware::access_log_middleware))
        .layer(axum::middleware::from_fn(middleware::trace_id_middleware))
        .layer(middleware::cors_layer(&state.config))
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(middleware::catch_panic_layer(
            !state.config.environment.is_production(),
        ))
        .with_state(state)
}
