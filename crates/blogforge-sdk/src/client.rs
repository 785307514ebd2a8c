//! HTTP client for the gateway API.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use blogforge_core::{GenerationMeta, GenerationResult};

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Prompt bounds mirrored from the server.
const PROMPT_MIN_LENGTH: usize = 3;
/// Upper prompt bound mirrored from the server.
const PROMPT_MAX_LENGTH: usize = 500;

/// Client for the blogforge gateway API.
#[derive(Debug, Clone)]
pub struct BlogClient {
    http: reqwest::Client,
    config: ClientConfig,
}

/// Builder for [`BlogClient`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<std::time::Duration>,
}

impl ClientBuilder {
    /// Set the gateway base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BlogClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::configuration("base_url is required"))?;

        let mut config = ClientConfig::new(base_url)?;
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }

        BlogClient::new(config)
    }
}

impl BlogClient {
    /// Create a client builder.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::configuration(format!("Invalid user agent: {e}")))?,
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Generate a blog post for a topic.
    ///
    /// The prompt is trimmed and checked against the server's bounds
    /// before any I/O so obviously-invalid input fails without a round
    /// trip.
    pub async fn generate(&self, prompt: &str) -> Result<GenerationResult> {
        let trimmed = prompt.trim();

        if trimmed.is_empty() {
            return Err(Error::invalid_prompt("Invalid prompt provided"));
        }
        if trimmed.chars().count() < PROMPT_MIN_LENGTH {
            return Err(Error::invalid_prompt(format!(
                "Prompt must be at least {PROMPT_MIN_LENGTH} characters"
            )));
        }
        if trimmed.chars().count() > PROMPT_MAX_LENGTH {
            return Err(Error::invalid_prompt(format!(
                "Prompt must not exceed {PROMPT_MAX_LENGTH} characters"
            )));
        }

        let url = self.url("/api/v1/blog/generate")?;
        debug!(url = %url, "Sending generation request");

        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "prompt": trimmed }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        // A non-JSON or empty body must not crash the caller.
        let data: Value = serde_json::from_str(&body).unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        if !status.is_success() {
            let message = data
                .get("error")
                .and_then(Value::as_str)
                .map_or_else(
                    || format!("Request failed with status {}", status.as_u16()),
                    String::from,
                );

            return Err(Error::Api {
                status: status.as_u16(),
                message,
                code: data.get("code").and_then(Value::as_str).map(String::from),
                request_id: data
                    .get("requestId")
                    .and_then(Value::as_str)
                    .map(String::from),
            });
        }

        // Defend the UI against a malformed or partial contract.
        if data.get("success").and_then(Value::as_bool) != Some(true) {
            return Err(Error::invalid_response("missing success flag"));
        }

        let blog = data
            .get("blog")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::invalid_response("missing blog text"))?
            .to_string();

        let prompt = data
            .get("prompt")
            .and_then(Value::as_str)
            .unwrap_or(trimmed)
            .to_string();

        let meta: GenerationMeta = data
            .get("meta")
            .cloned()
            .and_then(|meta| serde_json::from_value(meta).ok())
            .ok_or_else(|| Error::invalid_response("missing generation metadata"))?;

        Ok(GenerationResult { blog, prompt, meta })
    }

    /// Fetch the gateway's health snapshot.
    pub async fn health(&self) -> Result<ServiceHealth> {
        let url = self.url("/health")?;
        let response = self.http.get(url).send().await?;
        response.json().await.map_err(Error::from)
    }

    /// Fetch the gateway's readiness snapshot.
    pub async fn ready(&self) -> Result<ReadinessSnapshot> {
        let url = self.url("/ready")?;
        let response = self.http.get(url).send().await?;
        response.json().await.map_err(Error::from)
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| Error::configuration(format!("Invalid URL path '{path}': {e}")))
    }
}

/// Health endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceHealth {
    /// Service status string.
    pub status: String,
    /// API version.
    pub version: String,
    /// Seconds since gateway start.
    pub uptime: u64,
    /// ISO-8601 timestamp.
    pub timestamp: String,
}

/// Readiness endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadinessSnapshot {
    /// Whether every check passed.
    pub ready: bool,
    /// Individual checks.
    pub checks: ReadinessChecks,
    /// ISO-8601 timestamp.
    pub timestamp: String,
}

/// Individual readiness checks.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadinessChecks {
    /// Upstream API reachability.
    pub api: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BlogClient {
        BlogClient::builder()
            .base_url("http://localhost:5000")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn empty_prompt_fails_without_io() {
        let err = client().generate("   ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidPrompt { .. }));
        assert_eq!(err.to_string(), "Invalid prompt provided");
    }

    #[tokio::test]
    async fn short_prompt_fails_without_io() {
        let err = client().generate("ab").await.unwrap_err();
        assert_eq!(err.to_string(), "Prompt must be at least 3 characters");
    }

    #[tokio::test]
    async fn long_prompt_fails_without_io() {
        let prompt = "x".repeat(501);
        let err = client().generate(&prompt).await.unwrap_err();
        assert_eq!(err.to_string(), "Prompt must not exceed 500 characters");
    }

    #[test]
    fn builder_requires_base_url() {
        let err = BlogClient::builder().build().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
