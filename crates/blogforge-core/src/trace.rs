//! Trace context for log correlation.

/// Header carrying the trace id on requests and responses.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Opaque identifier correlating all log lines and the client-visible
/// response header for one request's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// The trace id itself.
    pub trace_id: String,
}

impl TraceContext {
    /// Generate a fresh trace context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trace_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Build a trace context from a propagated inbound id.
    pub fn from_value(trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
        }
    }
}

impl Default for TraceContext {
    fn default() -> Self {
        Self::new()
    }
}
