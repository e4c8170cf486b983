use axum::{extract::Path, extract::Query, Extension, Json};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use tactics_core::is_correct_move;

use crate::db::exercises;
use crate::error::AppError;
use crate::seed_data;

#[derive(Deserialize)]
pub struct ListQuery {
    pub nivel: Option<String>,
}

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub exercicio_id: Option<i64>,
    pub lance: Option<String>,
}

fn exercise_to_json(ex: &exercises::Exercise) -> JsonValue {
    serde_json::json!({
        "id": ex.id,
        "titulo": ex.title,
        "descricao": ex.description,
        "posicao_inicial": ex.initial_position,
        "melhor_lance": ex.best_move,
        "tipo_tatica": ex.tactic_type,
        "dificuldade": ex.difficulty,
        "pontos": ex.points,
        "dica": ex.hint,
        "explicacao_solucao": ex.solution_explanation,
        "jogadas_necessarias": ex.moves_required,
        "created_at": ex.created_at.to_rfc3339(),
    })
}

/// GET /exercicios?nivel=ranking5000
/// Without `nivel`: the regular catalog, grouped by difficulty.
/// With `nivel=ranking5000`: the ultra tier only, top points first,
/// auto-seeded on first access.
pub async fn list_exercises(
    Extension(pool): Extension<PgPool>,
    Query(q): Query<ListQuery>,
) -> Result<Json<JsonValue>, AppError> {
    let ultra = q.nivel.as_deref() == Some("ranking5000");

    let list = if ultra {
        let mut list =
            exercises::list_by_difficulty(&pool, seed_data::ULTRA_DIFFICULTY).await?;
        if list.is_empty() {
            let inserted =
                exercises::insert_catalog(&pool, &seed_data::ultra_catalog()).await;
            tracing::info!("Seeded {inserted} ultra-tier exercises on first access");
            list = exercises::list_by_difficulty(&pool, seed_data::ULTRA_DIFFICULTY).await?;
        }
        list
    } else {
        exercises::list_excluding_difficulty(&pool, seed_data::ULTRA_DIFFICULTY).await?
    };

    let result: Vec<JsonValue> = list.iter().map(exercise_to_json).collect();
    Ok(Json(serde_json::json!({
        "exercicios": result,
        "nivel_ultra": ultra,
    })))
}

/// GET /exercicios/{id}
pub async fn get_exercise(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<JsonValue>, AppError> {
    let exercise = exercises::get_exercise_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Exercise not found".into()))?;
    Ok(Json(exercise_to_json(&exercise)))
}

/// POST /exercicios/verificar
/// Check a submitted move against the stored best move. A missing `lance`
/// is treated as the empty string.
pub async fn verify_exercise(
    Extension(pool): Extension<PgPool>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let exercise_id = req
        .exercicio_id
        .ok_or(AppError::BadRequest("exercicio_id is required".into()))?;
    let user_move = req.lance.unwrap_or_default();

    let exercise = exercises::get_exercise_by_id(&pool, exercise_id)
        .await?
        .ok_or(AppError::NotFound("Exercise not found".into()))?;

    if is_correct_move(&user_move, &exercise.best_move) {
        Ok(Json(serde_json::json!({
            "correto": true,
            "pontos": exercise.points,
            "explicacao": exercise.solution_explanation,
            "tipo_tatica": exercise.tactic_type,
        })))
    } else {
        Ok(Json(serde_json::json!({
            "correto": false,
            "dica": exercise.hint,
            "melhor_lance": exercise.best_move,
        })))
    }
}
