//! Integration tests for the move-verification endpoint.
//!
//! Requires the server to be running on localhost:8000.

mod common;

use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch the regular exercise list and return the entry with the given title.
async fn find_exercise(client: &reqwest::Client, title: &str) -> Value {
    let resp = client
        .get(common::url("/exercicios"))
        .send()
        .await
        .expect("Failed to fetch exercises");
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    body["exercicios"]
        .as_array()
        .expect("exercicios should be an array")
        .iter()
        .find(|e| e["titulo"] == title)
        .unwrap_or_else(|| panic!("exercise '{title}' not found"))
        .clone()
}

/// POST a verification attempt and return the response.
async fn verify(client: &reqwest::Client, body: Value) -> reqwest::Response {
    client
        .post(common::url("/exercicios/verificar"))
        .json(&body)
        .send()
        .await
        .expect("Failed to send verify request")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// A correct move still carrying annotation symbols is accepted, and the
/// response surfaces the stored points, explanation and tactic type.
#[tokio::test]
async fn correct_move_with_annotations() {
    let client = common::client();
    common::ensure_seeded(&client).await;

    let exercise = find_exercise(&client, "Queen Sacrifice").await;
    let id = exercise["id"].as_i64().unwrap();

    // stored best move is "Qd8+"; submit it with extra annotations
    let resp = verify(&client, json!({ "exercicio_id": id, "lance": "Qd8!?" })).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["correto"], true);
    assert_eq!(body["pontos"], exercise["pontos"]);
    assert_eq!(body["explicacao"], exercise["explicacao_solucao"]);
    assert_eq!(body["tipo_tatica"], exercise["tipo_tatica"]);
}

/// The capture marker is stripped on both sides.
#[tokio::test]
async fn capture_marker_is_ignored() {
    let client = common::client();
    common::ensure_seeded(&client).await;

    let exercise = find_exercise(&client, "Knight Fork").await;
    let id = exercise["id"].as_i64().unwrap();

    // stored best move is "Ne6+"; "Nxe6" normalizes to the same string
    let resp = verify(&client, json!({ "exercicio_id": id, "lance": "Nxe6" })).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["correto"], true);
}

/// A wrong move gets the hint and the canonical best move back.
#[tokio::test]
async fn incorrect_move_returns_hint() {
    let client = common::client();
    common::ensure_seeded(&client).await;

    let exercise = find_exercise(&client, "Basic Pin").await;
    let id = exercise["id"].as_i64().unwrap();

    let resp = verify(&client, json!({ "exercicio_id": id, "lance": "h3" })).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["correto"], false);
    assert_eq!(body["melhor_lance"], exercise["melhor_lance"]);
    assert_eq!(body["dica"], exercise["dica"]);
}

/// A missing `lance` field is treated as the empty string, not an error.
#[tokio::test]
async fn missing_move_is_treated_as_empty() {
    let client = common::client();
    common::ensure_seeded(&client).await;

    let exercise = find_exercise(&client, "Basic Pin").await;
    let id = exercise["id"].as_i64().unwrap();

    let resp = verify(&client, json!({ "exercicio_id": id })).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["correto"], false);
}

/// An unknown exercise id is a 404.
#[tokio::test]
async fn unknown_exercise_is_not_found() {
    let client = common::client();
    common::ensure_seeded(&client).await;

    let resp = verify(&client, json!({ "exercicio_id": 99999999, "lance": "e4" })).await;
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

/// A missing exercise id is a 400.
#[tokio::test]
async fn missing_exercise_id_is_bad_request() {
    let client = common::client();

    let resp = verify(&client, json!({ "lance": "e4" })).await;
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}
