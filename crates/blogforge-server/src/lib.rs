//! # Blogforge Server
//!
//! HTTP surface for the blogforge gateway.
//!
//! This crate provides:
//! - Axum routes and handlers for generation, health, and readiness
//! - The cross-cutting middleware chain (trace ids, access logging,
//!   security headers, CORS, body cap, rate limiting, panic boundary)
//! - The uniform JSON error envelope
//! - Server bootstrap with graceful shutdown

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod rate_limit;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use error::ApiError;
pub use rate_limit::FixedWindowLimiter;
pub use routes::create_router;
pub use server::{Server, ServerConfig, ServerError};
pub use state::AppState;
