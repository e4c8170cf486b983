//! Integration tests for the examples endpoints.
//!
//! Requires the server to be running on localhost:8000.

mod common;

use serde_json::{json, Value};

/// Full example flow: create → list → delete → delete again.
#[tokio::test]
async fn create_list_and_delete_example() {
    let client = common::client();
    let suffix = common::unique_suffix();
    let name = format!("Shadow rook test {suffix}");

    // ── Create ──────────────────────────────────────────────────────
    let resp = client
        .post(common::url("/exemplos"))
        .json(&json!({
            "nome": name,
            "situacao": "Rook hidden behind its own pawn chain",
            "peca_sombra": "Rook on a1",
            "resultado": "The pawn push revealed the rook and won the game",
        }))
        .send()
        .await
        .expect("Failed to send create request");
    assert_eq!(resp.status(), 200, "Create should succeed");

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["nome"], name.as_str());
    assert!(body["id"].is_i64());
    assert!(body["created_at"].is_string());

    let id = body["id"].as_i64().unwrap();

    // ── List ────────────────────────────────────────────────────────
    let resp = client
        .get(common::url("/exemplos"))
        .send()
        .await
        .expect("Failed to send list request");
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    let found = body["exemplos"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["id"].as_i64() == Some(id));
    assert!(found, "Created example should appear in the list");

    // ── Delete ──────────────────────────────────────────────────────
    let resp = client
        .delete(common::url(&format!("/exemplos/{id}")))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(resp.status(), 200);

    // Deleting the same id again is a 404
    let resp = client
        .delete(common::url(&format!("/exemplos/{id}")))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(resp.status(), 404);
}

/// Submissions with blank fields are rejected.
#[tokio::test]
async fn blank_fields_are_rejected() {
    let client = common::client();

    let resp = client
        .post(common::url("/exemplos"))
        .json(&json!({
            "nome": "Incomplete",
            "situacao": "   ",
            "peca_sombra": "Bishop",
        }))
        .send()
        .await
        .expect("Failed to send create request");
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}
