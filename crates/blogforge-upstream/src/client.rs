//! Chat-completion HTTP client.
//!
//! Speaks the OpenAI-style contract: a two-message chat request with
//! bearer auth, answered by `{choices:[{message:{content}}]}`.

use std::time::Duration;

use async_trait::async_trait;
use blogforge_core::{DomainError, DomainResult, GeneratedContent, UpstreamClient};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::prompts;

/// Upstream client configuration.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the chat-completion API, without a trailing slash.
    pub api_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Bearer credential.
    pub api_key: SecretString,
    /// Request timeout for generation calls.
    pub timeout: Duration,
    /// Timeout for the readiness probe.
    pub probe_timeout: Duration,
    /// Maximum output tokens requested from the model.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl UpstreamConfig {
    /// Create a configuration with the default endpoint and parameters.
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_url: "https://router.huggingface.co/v1".to_string(),
            model: "Qwen/Qwen2.5-72B-Instruct".to_string(),
            api_key,
            timeout: Duration::from_secs(120),
            probe_timeout: Duration::from_secs(5),
            max_tokens: 2000,
            temperature: 0.7,
        }
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the generation request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the readiness probe timeout.
    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }
}

/// HTTP client for the hosted chat-completion endpoint.
pub struct ChatCompletionClient {
    config: UpstreamConfig,
    client: Client,
}

impl ChatCompletionClient {
    /// Create a new client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: UpstreamConfig) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// The configured model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.api_url)
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.config.api_url)
    }

    /// Map an upstream HTTP failure to the domain taxonomy.
    ///
    /// Most specific status first: 503 is the provider's cold-start
    /// signal, 429 its throttle; everything else mirrors the upstream
    /// status as a generic generation failure.
    fn parse_error(status: u16, body: &str) -> DomainError {
        match status {
            503 => DomainError::ModelLoading,
            429 => DomainError::RateLimited,
            _ => {
                let message = extract_error_message(body)
                    .unwrap_or_else(|| "Failed to generate blog content".to_string());
                DomainError::generation_failed(message, Some(status))
            }
        }
    }
}

/// Pull a human-readable message out of an upstream error body.
///
/// Providers answer with either `{"error": "..."}` or
/// `{"error": {"message": "..."}}`; anything else yields `None`.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;

    if let Some(message) = error.as_str() {
        return Some(message.to_string());
    }
    error
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(String::from)
}

#[async_trait]
impl UpstreamClient for ChatCompletionClient {
    async fn generate_content(
        &self,
        prompt: &str,
        trace_id: &str,
    ) -> DomainResult<GeneratedContent> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompts::SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompts::build_user_prompt(prompt),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            stream: false,
        };

        debug!(trace_id = %trace_id, model = %self.config.model, "Calling chat-completion API");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(trace_id = %trace_id, error = %e, "Chat-completion request failed");
                DomainError::generation_failed("Failed to generate blog content", None)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(trace_id = %trace_id, error = %e, "Failed to read upstream response");
            DomainError::generation_failed("Failed to generate blog content", None)
        })?;

        if !status.is_success() {
            let err = Self::parse_error(status.as_u16(), &body);
            error!(
                trace_id = %trace_id,
                status = status.as_u16(),
                code = err.code(),
                "Chat-completion API error"
            );
            return Err(err);
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            error!(trace_id = %trace_id, error = %e, "Invalid upstream response JSON");
            DomainError::generation_failed("Invalid response structure from AI model", Some(500))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                error!(trace_id = %trace_id, "Upstream response missing completion text");
                DomainError::generation_failed(
                    "Invalid response structure from AI model",
                    Some(500),
                )
            })?;

        Ok(GeneratedContent {
            content,
            model: self.config.model.clone(),
        })
    }

    async fn probe(&self) -> bool {
        let result = self
            .client
            .get(self.models_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .timeout(self.config.probe_timeout)
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, "Upstream probe failed");
                false
            }
        }
    }
}

// Wire types for the OpenAI-style chat-completion contract

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
