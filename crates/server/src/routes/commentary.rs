//! Commentary endpoints backed by the generative-text service.
//! Move correctness never depends on these routes.

use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::clients::gemini::{extract_json_object, GeminiClient};
use crate::error::AppError;

fn require_client(gemini: &Option<GeminiClient>) -> Result<&GeminiClient, AppError> {
    gemini
        .as_ref()
        .ok_or(AppError::Internal("AI service not configured".into()))
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// POST /chat/send
pub async fn chat_send(
    Extension(gemini): Extension<Option<GeminiClient>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let message = req.message.as_deref().unwrap_or("").trim().to_string();
    if message.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".into()));
    }

    let client = require_client(&gemini)?;

    let prompt = format!(
        r#"You are the "Mate King", a chess assistant specialized in the "In the Shadows" strategy.

RESPONSE RULES:
- Be CLEAR, SHORT and OBJECTIVE
- Skip flourishes, metaphors and needless introductions
- If someone just says "hello", answer with a plain greeting
- Stay on what was asked
- At most 2-3 sentences per answer

User: {message}

Mate King:"#
    );

    let text = client.generate(&prompt).await.map_err(AppError::Internal)?;

    Ok(Json(serde_json::json!({ "response": text })))
}

#[derive(Deserialize)]
pub struct EnemyResponseRequest {
    pub posicao: Option<JsonValue>,
    pub lance: Option<String>,
    pub tipo_tatica: Option<String>,
}

/// POST /exercicios/resposta_inimigo
/// Ask the model to answer as the opponent after the user's move.
pub async fn enemy_response(
    Extension(gemini): Extension<Option<GeminiClient>>,
    Json(req): Json<EnemyResponseRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let client = require_client(&gemini)?;

    let user_move = req.lance.as_deref().unwrap_or("");
    let tactic_type = req.tipo_tatica.as_deref().unwrap_or("");
    let position = req
        .posicao
        .map(|p| p.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let prompt = format!(
        r#"You are the "Mate King", a chess expert and master of the "In the Shadows" strategy.

CURRENT SITUATION:
- The user played: {user_move}
- Tactic type in question: {tactic_type}
- Current board position: {position}

ANSWER AS AN EXPERIENCED OPPONENT:
- Analyze the user's move
- Explain how you would reply as the opponent
- Say whether the move created a real threat
- Be direct and technical
- At most 3 sentences

Tactical analysis:"#
    );

    let text = client.generate(&prompt).await.map_err(AppError::Internal)?;

    Ok(Json(serde_json::json!({
        "resposta": text,
        "tipo": "analise_tatica",
    })))
}

#[derive(Deserialize)]
pub struct TacticAnalysisRequest {
    pub tipo_tatica: Option<String>,
    pub situacao: Option<String>,
}

/// POST /taticas/analise
pub async fn tactic_analysis(
    Extension(gemini): Extension<Option<GeminiClient>>,
    Json(req): Json<TacticAnalysisRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let tactic_type = req.tipo_tatica.as_deref().unwrap_or("").trim().to_string();
    let situation = req.situacao.as_deref().unwrap_or("").trim().to_string();
    if tactic_type.is_empty() || situation.is_empty() {
        return Err(AppError::BadRequest(
            "tipo_tatica and situacao are required".into(),
        ));
    }

    let client = require_client(&gemini)?;

    let prompt = format!(
        r#"You are an EXPERIENCED chess OPPONENT analyzing a tactic.

SITUATION:
- Tactic played: {tactic_type}
- Description: {situation}

ANSWER AS AN OPPONENT WHO:
- Spots the threat immediately
- Explains how they would defend or counterattack
- Mentions possible traps for the attacker
- Is direct and technical
- At most 3 sentences
- Focuses on DEFENSE and COUNTERPLAY

The experienced opponent replies:"#
    );

    let text = client.generate(&prompt).await.map_err(AppError::Internal)?;

    Ok(Json(serde_json::json!({
        "resposta": text,
        "tipo": "analise_defensiva",
        "tatica_analisada": tactic_type,
    })))
}

#[derive(Deserialize)]
pub struct ConceptExampleRequest {
    pub conceito: Option<String>,
    pub cenario: Option<String>,
}

/// POST /conceitos/exemplo
/// The model is asked for a JSON object; its completion goes through the
/// extract-or-default path, so a malformed completion never errors out.
pub async fn concept_example(
    Extension(gemini): Extension<Option<GeminiClient>>,
    Json(req): Json<ConceptExampleRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let concept = req.conceito.as_deref().unwrap_or("").trim().to_string();
    let scenario = req.cenario.as_deref().unwrap_or("").trim().to_string();
    if concept.is_empty() || scenario.is_empty() {
        return Err(AppError::BadRequest(
            "conceito and cenario are required".into(),
        ));
    }

    let client = require_client(&gemini)?;

    let prompt = format!(
        r#"You are a CHESS TEACHER explaining concepts through practical examples.

CONCEPT: {concept}
SCENARIO: {scenario}

WRITE A PRACTICAL EXPLANATION:
- Use clear, didactic language
- Explain HOW to recognize the concept
- Show WHEN to apply it
- Give practical tips
- Connect it with other concepts
- At most 150 words

ANSWER IN JSON FORMAT ONLY:
{{
    "explicacao": "didactic explanation of the concept",
    "dicas": ["tip 1", "tip 2", "tip 3"],
    "conceitos_relacionados": ["concept 1", "concept 2"]
}}

The teacher replies:"#
    );

    let text = client.generate(&prompt).await.map_err(AppError::Internal)?;

    let payload = extract_json_object(&text).unwrap_or_else(|| {
        serde_json::json!({
            "explicacao": format!(
                "The concept of {concept} is fundamental in chess. {scenario} This is a classic example of why positional understanding matters."
            ),
            "dicas": [
                format!("Watch for {} whenever it appears in your games", concept.to_lowercase()),
                "Practice recognizing this pattern",
                "Connect it with your overall strategy",
            ],
            "conceitos_relacionados": ["Strategy", "Tactics"],
        })
    });

    Ok(Json(payload))
}

#[derive(Deserialize)]
pub struct ShadowPracticeRequest {
    pub scenario: Option<String>,
    pub description: Option<String>,
}

/// POST /shadows/practice
pub async fn shadow_practice(
    Extension(gemini): Extension<Option<GeminiClient>>,
    Json(req): Json<ShadowPracticeRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let scenario = req.scenario.as_deref().unwrap_or("").trim().to_string();
    let description = req.description.as_deref().unwrap_or("").trim().to_string();
    if scenario.is_empty() || description.is_empty() {
        return Err(AppError::BadRequest(
            "scenario and description are required".into(),
        ));
    }

    let client = require_client(&gemini)?;

    let prompt = format!(
        r#"You are a CHESS MASTER specialized in the deceptive, subtle "In the Shadows" strategy.

SCENARIO: {scenario}
SITUATION: {description}

CREATE A PRACTICAL EXERCISE:
- Explain the SIGNS that reveal this opportunity
- Show the key move SEQUENCE
- Warn about common TRAPS
- Give TIMING advice
- Mention the opponent's COUNTERPLAY
- At most 200 words, practical language

ANSWER IN JSON FORMAT ONLY:
{{
    "preparacao": "how to prepare the scenario",
    "execucao": "key move sequence",
    "sinais": ["sign 1", "sign 2", "sign 3"],
    "armadilhas": ["trap 1", "trap 2"],
    "timing": "when to execute"
}}

The master replies:"#
    );

    let text = client.generate(&prompt).await.map_err(AppError::Internal)?;

    let payload = extract_json_object(&text).unwrap_or_else(|| {
        serde_json::json!({
            "preparacao": format!(
                "To execute {scenario}, place your pieces on apparently passive squares."
            ),
            "execucao": "Wait for the right moment, then play the decisive sequence.",
            "sinais": [
                "The opponent is focused elsewhere",
                "Your pieces are quietly coordinated",
                "The tactical moment is favorable",
            ],
            "armadilhas": [
                "Do not reveal your intentions too early",
                "Watch out for counterattacks",
            ],
            "timing": "Execute while the opponent is distracted by other threats",
        })
    });

    Ok(Json(payload))
}

#[derive(Deserialize)]
pub struct ShadowAnalyzeRequest {
    pub scenario: Option<String>,
    pub analysis_focus: Option<String>,
}

/// POST /shadows/analyze
pub async fn shadow_analyze(
    Extension(gemini): Extension<Option<GeminiClient>>,
    Json(req): Json<ShadowAnalyzeRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let scenario = req.scenario.as_deref().unwrap_or("").trim().to_string();
    let focus = req.analysis_focus.as_deref().unwrap_or("").trim().to_string();
    if scenario.is_empty() || focus.is_empty() {
        return Err(AppError::BadRequest(
            "scenario and analysis_focus are required".into(),
        ));
    }

    let client = require_client(&gemini)?;

    let prompt = format!(
        r#"You are a CHESS ANALYST specialized in subtle "In the Shadows" strategies.

SCENARIO: {scenario}
FOCUS: {focus}

WRITE A TECHNICAL ANALYSIS:
- Strategic PRINCIPLES involved
- Typical positional PATTERNS
- Common MISTAKES to avoid
- Main VARIATIONS
- APPLICATION across different openings
- Technical but accessible language

ANSWER IN JSON FORMAT ONLY:
{{
    "principios": ["principle 1", "principle 2"],
    "padroes": "key positional patterns",
    "erros_comuns": ["mistake 1", "mistake 2"],
    "aplicacoes": ["opening 1", "opening 2"],
    "dificuldade": "beginner/intermediate/advanced"
}}

The analyst replies:"#
    );

    let text = client.generate(&prompt).await.map_err(AppError::Internal)?;

    let payload = extract_json_object(&text).unwrap_or_else(|| {
        serde_json::json!({
            "principios": ["Deception", "Subtle coordination"],
            "padroes": format!(
                "The {scenario} pattern relies on misleading placement followed by sudden activation."
            ),
            "erros_comuns": [
                "Revealing intentions too early",
                "Not waiting for the ideal moment",
            ],
            "aplicacoes": ["Queen's Gambit", "Sicilian Defense"],
            "dificuldade": "intermediate",
        })
    });

    Ok(Json(payload))
}
