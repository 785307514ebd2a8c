//! Upstream client abstraction.
//!
//! The service layer depends on this trait rather than a concrete HTTP
//! client, so tests can substitute a scripted implementation and assert
//! that validation failures never reach the network.

use async_trait::async_trait;

use crate::error::DomainResult;

/// Text returned by the upstream model for one completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    /// The completion text, markdown.
    pub content: String,
    /// Identifier of the model that produced it.
    pub model: String,
}

/// A client for the hosted chat-completion endpoint.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Generate blog content for a sanitized topic.
    ///
    /// At most one upstream attempt is made per call; failures map to
    /// the [`crate::DomainError`] taxonomy and are never retried here.
    async fn generate_content(&self, prompt: &str, trace_id: &str)
        -> DomainResult<GeneratedContent>;

    /// Lightweight reachability probe, distinct from generation.
    ///
    /// Returns `true` when the upstream answered within the probe
    /// timeout. Never fails; used only by the readiness endpoint.
    async fn probe(&self) -> bool;
}
