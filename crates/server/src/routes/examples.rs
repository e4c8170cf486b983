use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use crate::db::examples;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct CreateExampleRequest {
    pub nome: Option<String>,
    pub situacao: Option<String>,
    pub peca_sombra: Option<String>,
    pub resultado: Option<String>,
}

fn example_to_json(ex: &examples::Example) -> JsonValue {
    serde_json::json!({
        "id": ex.id,
        "nome": ex.name,
        "situacao": ex.situation,
        "peca_sombra": ex.shadow_piece,
        "resultado": ex.result,
        "created_at": ex.created_at.to_rfc3339(),
    })
}

/// GET /exemplos
pub async fn list_examples(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<JsonValue>, AppError> {
    let list = examples::list_examples(&pool).await?;
    let result: Vec<JsonValue> = list.iter().map(example_to_json).collect();
    Ok(Json(serde_json::json!({ "exemplos": result })))
}

/// POST /exemplos
pub async fn create_example(
    Extension(pool): Extension<PgPool>,
    Json(req): Json<CreateExampleRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let name = req.nome.as_deref().unwrap_or("").trim();
    let situation = req.situacao.as_deref().unwrap_or("").trim();
    let shadow_piece = req.peca_sombra.as_deref().unwrap_or("").trim();
    let result = req.resultado.as_deref().unwrap_or("").trim();

    if name.is_empty() || situation.is_empty() || shadow_piece.is_empty() || result.is_empty() {
        return Err(AppError::BadRequest("All fields are required".into()));
    }

    let example = examples::create_example(&pool, name, situation, shadow_piece, result).await?;

    Ok(Json(example_to_json(&example)))
}

/// DELETE /exemplos/{id}
pub async fn delete_example(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<JsonValue>, AppError> {
    let removed = examples::delete_example(&pool, id).await?;
    if removed == 0 {
        return Err(AppError::NotFound("Example not found".into()));
    }
    Ok(Json(serde_json::json!({ "deleted": id })))
}
