//! Full-stack tests: the SDK against a really-bound gateway.

use std::net::SocketAddr;

use blogforge_sdk::BlogClient;
use pretty_assertions::assert_eq;

use crate::helpers::gateway;

/// Bind the router on an ephemeral port and return its address.
async fn serve(app: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port binds");
    let addr = listener.local_addr().expect("addr available");

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("server runs");
    });

    addr
}

#[tokio::test]
async fn sdk_generates_against_live_gateway() {
    let gateway = gateway().await;
    gateway.mock_completion("# Title\n\nBody text here.").await;
    let addr = serve(gateway.app.clone()).await;

    let client = BlogClient::builder()
        .base_url(format!("http://{addr}"))
        .build()
        .unwrap();

    let result = client
        .generate("The Future of Artificial Intelligence")
        .await
        .unwrap();

    assert_eq!(result.blog, "# Title\n\nBody text here.");
    assert_eq!(result.prompt, "The Future of Artificial Intelligence");
    assert_eq!(result.meta.model, "test/model");
}

#[tokio::test]
async fn sdk_surfaces_server_error_envelope() {
    let gateway = gateway().await;
    gateway.mock_failure(503).await;
    let addr = serve(gateway.app.clone()).await;

    let client = BlogClient::builder()
        .base_url(format!("http://{addr}"))
        .build()
        .unwrap();

    let err = client.generate("A valid topic").await.unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.code(), Some("MODEL_LOADING"));
    assert!(err.request_id().is_some());
}

#[tokio::test]
async fn sdk_health_round_trip() {
    let gateway = gateway().await;
    let addr = serve(gateway.app.clone()).await;

    let client = BlogClient::builder()
        .base_url(format!("http://{addr}"))
        .build()
        .unwrap();

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, "v1");
}
