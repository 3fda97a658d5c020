//! Bot config endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::api::middleware::{RequireAdmin, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::bot::{BotConfig, BotId};

/// Bot config as accepted from the UI
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotConfigRequest {
    /// Required on create; on update it must match the path if present
    #[serde(default)]
    pub id: Option<String>,
    pub alias: String,
    pub base_url: String,
    pub username: String,
    pub password: String,
}

/// Bot config as returned to the UI; the bot's password is never sent back
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotConfigResponse {
    pub id: String,
    pub alias: String,
    pub base_url: String,
    pub username: String,
}

impl From<&BotConfig> for BotConfigResponse {
    fn from(bot: &BotConfig) -> Self {
        Self {
            id: bot.id().to_string(),
            alias: bot.alias().to_string(),
            base_url: bot.base_url().to_string(),
            username: bot.username().to_string(),
        }
    }
}

fn to_bot_config(id: &str, request: BotConfigRequest) -> Result<BotConfig, ApiError> {
    let id = BotId::new(id).map_err(|e| ApiError::bad_request(e.to_string()))?;

    BotConfig::new(
        id,
        request.alias,
        request.base_url,
        request.username,
        request.password,
    )
    .map_err(|e| ApiError::bad_request(e.to_string()))
}

/// GET /api/config/bots
pub async fn list_bots(
    State(state): State<AppState>,
    _user: RequireUser,
) -> Result<Json<Vec<BotConfigResponse>>, ApiError> {
    let bots = state.bot_service.get_all().await?;
    Ok(Json(bots.iter().map(BotConfigResponse::from).collect()))
}

/// GET /api/config/bots/{bot_id}
pub async fn get_bot(
    State(state): State<AppState>,
    _user: RequireUser,
    Path(bot_id): Path<String>,
) -> Result<Json<BotConfigResponse>, ApiError> {
    let bot = state
        .bot_service
        .get(&bot_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Bot '{}' not found", bot_id)))?;

    Ok(Json(BotConfigResponse::from(&bot)))
}

/// POST /api/config/bots
pub async fn create_bot(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(mut request): Json<BotConfigRequest>,
) -> Result<(StatusCode, Json<BotConfigResponse>), ApiError> {
    let id = request
        .id
        .take()
        .ok_or_else(|| ApiError::bad_request("Bot id is required"))?;

    let created = state
        .bot_service
        .create(to_bot_config(&id, request)?)
        .await?;

    Ok((StatusCode::CREATED, Json(BotConfigResponse::from(&created))))
}

/// PUT /api/config/bots/{bot_id}
pub async fn update_bot(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(bot_id): Path<String>,
    Json(mut request): Json<BotConfigRequest>,
) -> Result<Json<BotConfigResponse>, ApiError> {
    if let Some(body_id) = request.id.take() {
        if body_id != bot_id {
            return Err(ApiError::bad_request(format!(
                "Bot id '{}' in body does not match '{}' in path",
                body_id, bot_id
            )));
        }
    }

    let updated = state
        .bot_service
        .update(to_bot_config(&bot_id, request)?)
        .await?;

    Ok(Json(BotConfigResponse::from(&updated)))
}

/// DELETE /api/config/bots/{bot_id}
///
/// Responds with the removed config.
pub async fn delete_bot(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(bot_id): Path<String>,
) -> Result<Json<BotConfigResponse>, ApiError> {
    let removed = state
        .bot_service
        .delete(&bot_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Bot '{}' not found", bot_id)))?;

    Ok(Json(BotConfigResponse::from(&removed)))
}
