use axum::{Extension, Json};
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use crate::db::exercises;
use crate::error::AppError;
use crate::seed_data;

/// POST /inicializar_exercicios
/// Seed the core catalog once; no-op when exercises already exist.
pub async fn seed_base_exercises(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<JsonValue>, AppError> {
    if exercises::count_exercises(&pool).await? > 0 {
        return Ok(Json(serde_json::json!({
            "message": "Exercises already exist",
        })));
    }

    let inserted = exercises::insert_catalog(&pool, &seed_data::base_catalog()).await;
    tracing::info!("Seeded {inserted} base exercises");

    Ok(Json(serde_json::json!({
        "message": format!("Created {inserted} exercises"),
    })))
}

/// POST /inicializar_exercicios_ranking5000
/// Clear and re-seed the ultra tier. Inserts are best-effort per item.
pub async fn seed_ultra_exercises(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<JsonValue>, AppError> {
    exercises::delete_by_difficulty(&pool, seed_data::ULTRA_DIFFICULTY).await?;

    let inserted = exercises::insert_catalog(&pool, &seed_data::ultra_catalog()).await;
    tracing::info!("Seeded {inserted} ultra-tier exercises");

    Ok(Json(serde_json::json!({
        "message": format!("Created {inserted} Ranking 5000 exercises"),
    })))
}

/// POST /adicionar_exercicios_variados
/// Seed the varied catalog once; no-op when varied exercises already exist.
pub async fn seed_varied_exercises(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<JsonValue>, AppError> {
    let existing =
        exercises::count_by_tactic_types(&pool, seed_data::VARIED_TACTIC_TYPES).await?;
    if existing > 0 {
        return Ok(Json(serde_json::json!({
            "message": "Varied exercises already exist",
        })));
    }

    let inserted = exercises::insert_catalog(&pool, &seed_data::varied_catalog()).await;
    tracing::info!("Seeded {inserted} varied exercises");

    Ok(Json(serde_json::json!({
        "message": format!("Added {inserted} varied exercises"),
    })))
}

/// POST /limpar_exercicios
pub async fn clear_exercises(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<JsonValue>, AppError> {
    let removed = exercises::delete_all_exercises(&pool).await?;
    tracing::info!("Cleared {removed} exercises");

    Ok(Json(serde_json::json!({
        "message": "Exercises cleared",
        "removed": removed,
    })))
}
