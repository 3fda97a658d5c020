//! Authentication API endpoints
//!
//! Login, token refresh, the current user and password change.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::api::middleware::{bearer_token, MaybeUser, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::infrastructure::user::ChangePasswordRequest;

const TOKEN_REFRESH_FAILED: &str = "token_refresh_failed";

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/token", post(login))
        .route("/token/refresh", get(refresh_token))
        .route("/user", get(get_current_user))
        .route("/user/password", put(change_password))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    /// Seconds
    pub expires_in: u64,
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub username: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordBody {
    pub current_password: String,
    pub new_password: String,
}

/// POST /api/token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .user_service
        .authenticate(&request.username, &request.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid username or password"))?;

    let token = state.token_service.generate_token(&user).map_err(|e| {
        error!(username = %user.username(), error = %e, "Failed to issue token");
        ApiError::internal("Failed to issue token")
    })?;

    info!(username = %user.username(), "User logged in");
    Ok(Json(TokenResponse {
        token,
        expires_in: state.token_service.expiration_secs(),
    }))
}

/// GET /api/token/refresh
///
/// The presented token must have passed the authentication filter,
/// revocation check included.
pub async fn refresh_token(
    State(state): State<AppState>,
    MaybeUser(principal): MaybeUser,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, ApiError> {
    let refresh_failed = || ApiError::unauthorized("Token refresh failed").with_code(TOKEN_REFRESH_FAILED);

    let (Some(principal), Some(token)) = (principal, bearer_token(&headers)) else {
        return Err(refresh_failed());
    };

    let token = state.token_service.refresh(token).map_err(|e| {
        warn!(username = %principal.username, kind = e.kind(), error = %e, "Token refresh failed");
        refresh_failed()
    })?;

    Ok(Json(TokenResponse {
        token,
        expires_in: state.token_service.expiration_secs(),
    }))
}

/// GET /api/user
pub async fn get_current_user(RequireUser(principal): RequireUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        username: principal.username,
        roles: principal.roles.into_iter().map(String::from).collect(),
    })
}

/// PUT /api/user/password
///
/// Tokens issued before the change stop being accepted.
pub async fn change_password(
    State(state): State<AppState>,
    RequireUser(principal): RequireUser,
    Json(body): Json<ChangePasswordBody>,
) -> Result<StatusCode, ApiError> {
    state
        .user_service
        .change_password(
            &principal.username,
            ChangePasswordRequest {
                current_password: body.current_password,
                new_password: body.new_password,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
