//! Shared application state.

use std::sync::Arc;
use std::time::Instant;

use blogforge_config::AppConfig;
use blogforge_core::UpstreamClient;
use blogforge_service::BlogService;

use crate::rate_limit::FixedWindowLimiter;

/// State shared by every handler and middleware, cloned per request.
///
/// Everything here is constructed once at startup and injected; no
/// component reaches for ambient globals.
#[derive(Clone)]
pub struct AppState {
    /// Validated process configuration.
    pub config: Arc<AppConfig>,
    /// The generation service.
    pub service: Arc<BlogService>,
    /// Upstream client, used directly only by the readiness probe.
    pub upstream: Arc<dyn UpstreamClient>,
    /// Fixed-window rate limiter for API routes.
    pub limiter: Arc<FixedWindowLimiter>,
    /// Process start, for the health endpoint's uptime.
    pub started_at: Instant,
}

impl AppState {
    /// Build application state from configuration and an upstream
    /// client.
    #[must_use]
    pub fn new(config: AppConfig, upstream: Arc<dyn UpstreamClient>) -> Self {
        let service = Arc::new(BlogService::new(Arc::clone(&upstream)));
        let limiter = Arc::new(FixedWindowLimiter::new(
            config.rate_limit_max,
            config.rate_limit_window,
        ));

        Self {
            config: Arc::new(config),
            service,
            upstream,
            limiter,
            started_at: Instant::now(),
        }
    }
}
