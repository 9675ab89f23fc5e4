use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bracket::{read_bracket, save_bracket, SaveBracketParams};
use crate::error::{AppError, INVALID_PAYLOAD};
use crate::state::AppState;

pub const SAVED_MESSAGE: &str = "Salvo com sucesso!";

#[derive(Debug, Deserialize)]
pub struct SaveTorneioRequest {
    pub jogo_id: Option<String>,
    pub dados: Option<Value>,
    pub stream_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveTorneioResponse {
    pub msg: &'static str,
}

pub async fn home() -> &'static str {
    "API Backend E-Sports Online!"
}

/// GET /api/torneio/{game_tag}
pub async fn get_torneio(
    State(state): State<AppState>,
    Path(game_tag): Path<String>,
) -> Result<Json<Value>, AppError> {
    let bracket = read_bracket(&state.db, &game_tag).await?;
    Ok(Json(Value::Object(bracket)))
}

/// POST /api/torneio
pub async fn save_torneio(
    State(state): State<AppState>,
    payload: Result<Json<SaveTorneioRequest>, JsonRejection>,
) -> Result<Json<SaveTorneioResponse>, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable save payload");
        AppError::BadRequest(INVALID_PAYLOAD.to_string())
    })?;

    let game_tag = body
        .jogo_id
        .filter(|tag| !tag.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(INVALID_PAYLOAD.to_string()))?;

    let dados = match body.dados {
        Some(Value::Object(map)) if !map.is_empty() => map,
        _ => return Err(AppError::BadRequest(INVALID_PAYLOAD.to_string())),
    };

    save_bracket(
        &state.db,
        SaveBracketParams {
            game_tag,
            dados,
            stream_url: body.stream_url,
        },
    )
    .await?;

    Ok(Json(SaveTorneioResponse { msg: SAVED_MESSAGE }))
}
