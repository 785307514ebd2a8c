//! # Blogforge Service
//!
//! Business logic for blog generation: prompt sanitization and
//! validation, delegation to the upstream client, and response
//! metadata. Sits between the HTTP controller and the repository;
//! holds no state between calls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;
use std::time::Instant;

use blogforge_core::{
    DomainError, DomainResult, GenerationMeta, GenerationResult, UpstreamClient,
};
use tracing::{info, warn};

/// Minimum sanitized prompt length, in characters.
pub const PROMPT_MIN_LENGTH: usize = 3;
/// Maximum sanitized prompt length, in characters.
pub const PROMPT_MAX_LENGTH: usize = 500;

/// Blog generation service.
pub struct BlogService {
    upstream: Arc<dyn UpstreamClient>,
}

impl BlogService {
    /// Create a service delegating to the given upstream client.
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { upstream }
    }

    /// Validate, sanitize, and generate a blog post for a topic.
    ///
    /// Validation failures surface as [`DomainError::InvalidPrompt`]
    /// before any network call; upstream failures propagate unchanged.
    pub async fn generate(
        &self,
        raw_prompt: &str,
        trace_id: &str,
    ) -> DomainResult<GenerationResult> {
        let prompt = sanitize_prompt(raw_prompt);
        validate_prompt(&prompt)?;

        info!(
            trace_id = %trace_id,
            prompt_length = prompt.len(),
            "Generating blog"
        );

        let start = Instant::now();
        let generated = match self.upstream.generate_content(&prompt, trace_id).await {
            Ok(generated) => generated,
            Err(err) => {
                warn!(
                    trace_id = %trace_id,
                    code = err.code(),
                    error = %err,
                    "Blog generation failed"
                );
                return Err(err);
            }
        };
        let duration = start.elapsed();

        let word_count = count_words(&generated.content);

        info!(
            trace_id = %trace_id,
            word_count = word_count,
            duration_ms = duration.as_millis() as u64,
            model = %generated.model,
            "Blog generated"
        );

        Ok(GenerationResult {
            blog: generated.content,
            prompt,
            meta: GenerationMeta {
                word_count,
                model: generated.model,
                generated_at: chrono::Utc::now().timestamp_millis(),
            },
        })
    }
}

/// Strip ASCII control characters (0x00-0x1F, 0x7F) and trim
/// surrounding whitespace.
///
/// Control characters go first so the result never re-exposes
/// whitespace at the edges; sanitizing twice yields the same string.
#[must_use]
pub fn sanitize_prompt(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '\0'..='\x1f' | '\x7f'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Check the sanitized prompt against the length bounds.
fn validate_prompt(prompt: &str) -> DomainResult<()> {
    let length = prompt.chars().count();

    if length < PROMPT_MIN_LENGTH {
        return Err(DomainError::invalid_prompt(format!(
            "Prompt must be at least {PROMPT_MIN_LENGTH} characters"
        )));
    }

    if length > PROMPT_MAX_LENGTH {
        return Err(DomainError::invalid_prompt(format!(
            "Prompt must not exceed {PROMPT_MAX_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Count whitespace-delimited, non-empty tokens.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
