//! Shared fixtures: a router wired to a wiremock upstream.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use blogforge_config::AppConfig;
use blogforge_server::{create_router, AppState};
use blogforge_upstream::{ChatCompletionClient, UpstreamConfig};
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A gateway router plus the wiremock upstream it talks to.
pub struct TestGateway {
    /// The application router, ready for `oneshot`.
    pub app: Router,
    /// The simulated upstream.
    pub upstream: MockServer,
}

/// Build a gateway with the given rate limit, pointed at a fresh
/// wiremock upstream.
pub async fn gateway_with_rate_limit(rate_limit_max: u32) -> TestGateway {
    let upstream = MockServer::start().await;

    let config = AppConfig::from_lookup(|key| match key {
        "HUGGINGFACE_API_KEY" => Some("test-key".to_string()),
        "RATE_LIMIT_MAX" => Some(rate_limit_max.to_string()),
        "UPSTREAM_URL" => Some(format!("{}/v1", upstream.uri())),
        "UPSTREAM_MODEL" => Some("test/model".to_string()),
        _ => None,
    })
    .expect("test config is valid");

    let upstream_config = UpstreamConfig::new(SecretString::new("test-key".to_string()))
        .with_api_url(config.upstream_url.clone())
        .with_model(config.upstream_model.clone());
    let client = ChatCompletionClient::new(upstream_config).expect("client builds");

    let app = create_router(AppState::new(config, Arc::new(client)));

    TestGateway { app, upstream }
}

/// Build a gateway with a generous rate limit.
pub async fn gateway() -> TestGateway {
    gateway_with_rate_limit(1000).await
}

impl TestGateway {
    /// Mount a successful chat completion returning `content`.
    pub async fn mock_completion(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": content } }]
            })))
            .mount(&self.upstream)
            .await;
    }

    /// Mount an upstream failure with the given status.
    pub async fn mock_failure(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.upstream)
            .await;
    }

    /// Number of completion calls the upstream received.
    pub async fn completion_calls(&self) -> usize {
        self.upstream
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == "/v1/chat/completions")
            .count()
    }
}

/// Build a generation request.
pub fn generate_request(prompt: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/blog/generate")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "prompt": prompt }).to_string()))
        .expect("request builds")
}

/// Collect a response body as JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}
