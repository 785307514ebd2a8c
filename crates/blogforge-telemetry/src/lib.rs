//! # Blogforge Telemetry
//!
//! Structured logging for the blogforge gateway.
//!
//! Log output is JSON lines with level filtering; every request-scoped
//! line carries the trace id as a structured field so one request's
//! lifecycle can be correlated end to end.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod logging;

// Re-export main types
pub use logging::{init_logging, LoggingConfig, TelemetryError};
