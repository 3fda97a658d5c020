//! Exchange config endpoints, proxied to the bot

use axum::extract::{Path, State};

use crate::api::middleware::{RequireAdmin, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::exchange::ExchangeConfig;

/// GET /api/config/exchange/{bot_id}
pub async fn get_exchange_config(
    State(state): State<AppState>,
    _user: RequireUser,
    Path(bot_id): Path<String>,
) -> Result<Json<ExchangeConfig>, ApiError> {
    Ok(Json(state.exchange_service.get(&bot_id).await?))
}

/// PUT /api/config/exchange/{bot_id}
pub async fn update_exchange_config(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(bot_id): Path<String>,
    Json(config): Json<ExchangeConfig>,
) -> Result<Json<ExchangeConfig>, ApiError> {
    Ok(Json(state.exchange_service.update(&bot_id, config).await?))
}
