//! Integration tests for commentary endpoint input validation.
//!
//! Requires the server to be running on localhost:8000. Only the validation
//! paths are exercised here; they run before any call to the AI service, so
//! no API key is needed.

mod common;

use serde_json::{json, Value};

async fn post_json(client: &reqwest::Client, path: &str, body: Value) -> reqwest::Response {
    client
        .post(common::url(path))
        .json(&body)
        .send()
        .await
        .unwrap_or_else(|e| panic!("Failed to POST {path}: {e}"))
}

#[tokio::test]
async fn empty_chat_message_is_rejected() {
    let client = common::client();

    let resp = post_json(&client, "/chat/send", json!({ "message": "   " })).await;
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn tactic_analysis_requires_both_fields() {
    let client = common::client();

    let resp = post_json(&client, "/taticas/analise", json!({ "tipo_tatica": "Pin" })).await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn concept_example_requires_both_fields() {
    let client = common::client();

    let resp = post_json(&client, "/conceitos/exemplo", json!({ "cenario": "endgame" })).await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn shadow_routes_require_their_fields() {
    let client = common::client();

    let resp = post_json(&client, "/shadows/practice", json!({ "scenario": "hidden rook" })).await;
    assert_eq!(resp.status(), 400);

    let resp = post_json(&client, "/shadows/analyze", json!({})).await;
    assert_eq!(resp.status(), 400);
}
