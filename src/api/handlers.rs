//! API request handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::history::{self, ConversationHistory};

use super::error::{ApiError, ApiResult};
use super::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fetch the stored transcript for a user.
///
/// Unknown users get an empty transcript, never an error.
#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ConversationHistory>> {
    let transcript = state.history.get(&user_id).await?;
    Ok(Json(transcript))
}

/// Chat request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// Chat response body.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Handle one chat turn: load the prior transcript, call the model, persist
/// the updated transcript, return the reply.
#[instrument(skip(state, request))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    // Empty strings count as missing, same as absent fields.
    let message = request.message.filter(|m| !m.is_empty());
    let user_id = request.user_id.filter(|u| !u.is_empty());
    let (Some(message), Some(user_id)) = (message, user_id) else {
        return Err(ApiError::missing_params());
    };

    let prior = state.history.get(&user_id).await?;
    let contents = history::to_model_contents(&prior);

    let turn = state.model.generate(&contents, &message).await?;

    // The transcript is written back only after a successful generation.
    let updated = history::to_client_history(&turn.history);
    state.history.put(&user_id, &updated).await?;

    info!(user_id = %user_id, turns = updated.len(), "Completed chat turn");

    Ok(Json(ChatResponse { reply: turn.reply }))
}
