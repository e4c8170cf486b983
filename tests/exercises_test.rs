//! Integration test for the seeding routes.
//!
//! Requires the server to be running on localhost:8000. The flow clears the
//! catalog, so the whole lifecycle runs as a single sequential test; read-only
//! catalog checks live in catalog_test.rs.

mod common;

use serde_json::Value;

async fn post(client: &reqwest::Client, path: &str) -> Value {
    let resp = client
        .post(common::url(path))
        .send()
        .await
        .unwrap_or_else(|e| panic!("Failed to POST {path}: {e}"));
    assert_eq!(resp.status(), 200, "POST {path} should succeed");
    resp.json().await.unwrap()
}

async fn get(client: &reqwest::Client, path: &str) -> Value {
    let resp = client
        .get(common::url(path))
        .send()
        .await
        .unwrap_or_else(|e| panic!("Failed to GET {path}: {e}"));
    assert_eq!(resp.status(), 200, "GET {path} should succeed");
    resp.json().await.unwrap()
}

/// Clear → seed → list → re-seed → ultra tier, in one sequential flow.
#[tokio::test]
async fn seeding_lifecycle() {
    let client = common::client();

    // ── Clear everything ────────────────────────────────────────────
    let body = post(&client, "/limpar_exercicios").await;
    assert!(body["message"].is_string());

    // ── Seed the base catalog ───────────────────────────────────────
    let body = post(&client, "/inicializar_exercicios").await;
    assert!(
        body["message"].as_str().unwrap().starts_with("Created"),
        "First seeding should create exercises, got: {}",
        body["message"]
    );

    // Seeding again is a no-op
    let body = post(&client, "/inicializar_exercicios").await;
    assert_eq!(body["message"], "Exercises already exist");

    // ── Regular list excludes the ultra tier ────────────────────────
    let body = get(&client, "/exercicios").await;
    assert_eq!(body["nivel_ultra"], false);
    let list = body["exercicios"].as_array().unwrap();
    assert!(!list.is_empty());
    for ex in list {
        assert_ne!(ex["dificuldade"], "Ranking 5000");
    }

    // ── Varied catalog reports either creation or presence ──────────
    let body = post(&client, "/adicionar_exercicios_variados").await;
    assert!(body["message"].is_string());

    // ── Ultra tier is auto-seeded on first access ───────────────────
    let body = get(&client, "/exercicios?nivel=ranking5000").await;
    assert_eq!(body["nivel_ultra"], true);
    let ultra = body["exercicios"].as_array().unwrap();
    assert!(!ultra.is_empty());

    let mut last_points = i64::MAX;
    for ex in ultra {
        assert_eq!(ex["dificuldade"], "Ranking 5000");
        let points = ex["pontos"].as_i64().unwrap();
        assert!(points <= last_points, "ultra tier should be sorted by points");
        last_points = points;
    }

    // ── Explicit ultra re-seed replaces the tier ────────────────────
    let body = post(&client, "/inicializar_exercicios_ranking5000").await;
    assert!(body["message"].as_str().unwrap().starts_with("Created"));

    let body = get(&client, "/exercicios?nivel=ranking5000").await;
    assert_eq!(
        body["exercicios"].as_array().unwrap().len(),
        ultra.len(),
        "re-seeding should produce the same catalog size"
    );
}
