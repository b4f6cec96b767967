//! Integration tests for the chat relay HTTP surface.
//!
//! Each test builds the router around a canned completion client, binds an
//! ephemeral listener, and drives it with a real HTTP client.

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use chatrelay::{build_router, Container, DomainError, MockCompletion};

/// Bind the router on an ephemeral port and serve it in the background.
async fn spawn_app(mock: Arc<MockCompletion>) -> SocketAddr {
    let container = Arc::new(Container::with_client(mock));
    let router = build_router(container);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });

    addr
}

async fn post_chat(addr: SocketAddr, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("http://{addr}/api/chat"))
        .json(&body)
        .send()
        .await
        .expect("Request failed")
}

#[tokio::test(flavor = "multi_thread")]
async fn valid_prompt_returns_reply_with_timestamp_and_provider() {
    let mock = Arc::new(MockCompletion::replying("the generated text"));
    let addr = spawn_app(mock).await;

    // Reply timestamps are truncated to millisecond precision, so give the
    // window a millisecond of slack on the lower bound.
    let before = Utc::now() - chrono::Duration::milliseconds(1);
    let response = post_chat(addr, json!({ "prompt": "hello" })).await;
    let after = Utc::now();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["response"], "the generated text");
    assert_eq!(body["provider"], "Groq AI");

    let timestamp = DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap())
        .expect("timestamp should be RFC 3339")
        .with_timezone(&Utc);
    assert!(timestamp >= before && timestamp <= after);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_prompt_field_is_rejected() {
    let addr = spawn_app(Arc::new(MockCompletion::replying("unused"))).await;

    let response = post_chat(addr, json!({})).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Prompt is required");
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_prompt_is_rejected() {
    let addr = spawn_app(Arc::new(MockCompletion::replying("unused"))).await;

    let response = post_chat(addr, json!({ "prompt": "" })).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Prompt is required");
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_body_is_rejected_like_a_missing_prompt() {
    let addr = spawn_app(Arc::new(MockCompletion::replying("unused"))).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/chat"))
        .header("Content-Type", "application/json")
        .body("not json")
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Prompt is required");
}

#[tokio::test(flavor = "multi_thread")]
async fn oversized_prompt_is_rejected() {
    let mock = Arc::new(MockCompletion::replying("unused"));
    let addr = spawn_app(mock.clone()).await;

    let response = post_chat(addr, json!({ "prompt": "a".repeat(501) })).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Prompt is too long (max 500 characters)");
    assert_eq!(mock.calls(), 0, "validation must short-circuit the client");
}

#[tokio::test(flavor = "multi_thread")]
async fn boundary_length_prompt_passes_validation() {
    let addr = spawn_app(Arc::new(MockCompletion::replying("ok"))).await;

    let response = post_chat(addr, json!({ "prompt": "a".repeat(500) })).await;

    assert_eq!(response.status(), 200);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_api_key_surfaces_as_uniform_500() {
    let mock = Arc::new(MockCompletion::failing(DomainError::configuration(
        "GROQ_API_KEY not found in environment variables",
    )));
    let addr = spawn_app(mock).await;

    let response = post_chat(addr, json!({ "prompt": "hello" })).await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to generate response");
    assert_eq!(
        body["details"],
        "GROQ_API_KEY not found in environment variables"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn upstream_failure_detail_carries_the_status_code() {
    let mock = Arc::new(MockCompletion::failing(DomainError::Upstream {
        status: 429,
        body: "rate limited".into(),
    }));
    let addr = spawn_app(mock).await;

    let response = post_chat(addr, json!({ "prompt": "hello" })).await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to generate response");
    assert!(body["details"].as_str().unwrap().contains("429"));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_descriptor_is_static() {
    // Even a client that always fails must not affect the liveness endpoint.
    let mock = Arc::new(MockCompletion::failing(DomainError::http("unreachable")));
    let addr = spawn_app(mock).await;

    let response = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "running");
    assert_eq!(body["endpoints"]["chat"], "POST /api/chat");
    assert_eq!(body["endpoints"]["health"], "GET /");
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_prompts_hit_the_client_once_each() {
    let mock = Arc::new(MockCompletion::replying("same answer"));
    let addr = spawn_app(mock.clone()).await;

    for _ in 0..2 {
        let response = post_chat(addr, json!({ "prompt": "hello" })).await;
        assert_eq!(response.status(), 200);
    }

    assert_eq!(mock.calls(), 2, "each request performs its own upstream call");
}
