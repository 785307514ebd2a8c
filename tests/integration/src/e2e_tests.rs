//! End-to-end scenarios through the full router and wire contract.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use crate::helpers::{body_json, gateway, gateway_with_rate_limit, generate_request};

#[tokio::test]
async fn generate_happy_path() {
    let gateway = gateway().await;
    gateway.mock_completion("# Title\n\nBody text here.").await;

    let response = gateway
        .app
        .oneshot(generate_request("The Future of Artificial Intelligence"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["blog"], "# Title\n\nBody text here.");
    // The in-bounds prompt passes through sanitization unchanged.
    assert_eq!(json["prompt"], "The Future of Artificial Intelligence");
    assert_eq!(json["meta"]["model"], "test/model");
    assert_eq!(
        json["meta"]["wordCount"],
        "# Title\n\nBody text here.".split_whitespace().count()
    );
    assert!(json["meta"]["generatedAt"].as_i64().unwrap() > 0);

    // The sanitized topic reached the upstream user message.
    let requests = gateway.upstream.received_requests().await.unwrap();
    let sent: serde_json::Value = requests[0].body_json().unwrap();
    assert!(sent["messages"][1]["content"]
        .as_str()
        .unwrap()
        .contains("The Future of Artificial Intelligence"));
    assert_eq!(sent["stream"], false);
}

#[tokio::test]
async fn short_prompt_fails_without_touching_upstream() {
    let gateway = gateway().await;
    gateway.mock_completion("unused").await;

    let response = gateway
        .app
        .clone()
        .oneshot(generate_request("ab"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "INVALID_PROMPT");
    assert_eq!(json["error"], "Prompt must be at least 3 characters");
    assert!(json["requestId"].is_string());

    assert_eq!(gateway.completion_calls().await, 0);
}

#[tokio::test]
async fn upstream_503_surfaces_as_model_loading() {
    let gateway = gateway().await;
    gateway.mock_failure(503).await;

    let response = gateway
        .app
        .oneshot(generate_request("A valid topic"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "MODEL_LOADING");
    assert_eq!(
        json["error"],
        "Model is loading. Please try again in a few seconds."
    );
}

#[tokio::test]
async fn upstream_429_surfaces_as_rate_limited() {
    let gateway = gateway().await;
    gateway.mock_failure(429).await;

    let response = gateway
        .app
        .oneshot(generate_request("A valid topic"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(json["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn upstream_5xx_mirrors_status_as_generation_failed() {
    let gateway = gateway().await;
    gateway.mock_failure(502).await;

    let response = gateway
        .app
        .oneshot(generate_request("A valid topic"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "GENERATION_FAILED");
}

#[tokio::test]
async fn local_rate_limit_hits_before_controller() {
    let gateway = gateway_with_rate_limit(2).await;
    gateway.mock_completion("content").await;

    for _ in 0..2 {
        let response = gateway
            .app
            .clone()
            .oneshot(generate_request("A valid topic"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = gateway
        .app
        .clone()
        .oneshot(generate_request("A valid topic"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(json["code"], "RATE_LIMITED");

    // Only the two admitted requests reached the upstream.
    assert_eq!(gateway.completion_calls().await, 2);
}

#[tokio::test]
async fn health_is_200_even_when_upstream_is_down() {
    // No mocks mounted: every upstream call would 404.
    let gateway = gateway().await;

    let response = gateway
        .app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], "v1");
}

#[tokio::test]
async fn ready_reflects_upstream_reachability() {
    let gateway = gateway().await;

    // Probe target not mounted yet: not ready.
    let response = gateway
        .app
        .clone()
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["ready"], false);
    assert_eq!(json["checks"]["api"], false);

    // Mount the models listing: ready.
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/v1/models"))
        .respond_with(wiremock::ResponseTemplate::new(200))
        .mount(&gateway.upstream)
        .await;

    let response = gateway
        .app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ready"], true);
    assert_eq!(json["checks"]["api"], true);
}

#[tokio::test]
async fn unknown_route_returns_not_found_envelope() {
    let gateway = gateway().await;

    let response = gateway
        .app
        .oneshot(
            Request::builder()
                .uri("/api/v1/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn trace_id_round_trips_from_request_to_error_envelope() {
    let gateway = gateway().await;

    let response = gateway
        .app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/blog/generate")
                .header("content-type", "application/json")
                .header("x-trace-id", "my-trace")
                .body(Body::from(r#"{"prompt":"ab"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-trace-id").unwrap(), "my-trace");
    let json = body_json(response).await;
    assert_eq!(json["requestId"], "my-trace");
}

#[tokio::test]
async fn control_characters_are_stripped_before_generation() {
    let gateway = gateway().await;
    gateway.mock_completion("content").await;

    let response = gateway
        .app
        .oneshot(generate_request("  Rust\u{0000} in production\u{007f}  "))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["prompt"], "Rust in production");
}
