//! JWT authentication filter and principal extractors
//!
//! [`jwt_authentication_filter`] runs on every request. A valid bearer token
//! puts an [`AuthenticatedPrincipal`] into the request extensions; anything
//! else lets the request through anonymously, and the extractors below
//! decide whether the handler accepts it.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::Role;

/// Caller identity established from a validated token
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedPrincipal {
    pub username: String,
    /// As embedded in the token at issue time
    pub roles: Vec<Role>,
}

impl AuthenticatedPrincipal {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.as_str() == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::ADMIN)
    }
}

pub async fn jwt_authentication_filter(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(principal) = authenticate(&state, request.headers()).await {
        debug!(username = %principal.username, "Authenticated request");
        request.extensions_mut().insert(principal);
    }

    next.run(request).await
}

async fn authenticate(state: &AppState, headers: &HeaderMap) -> Option<AuthenticatedPrincipal> {
    let token = bearer_token(headers)?;

    let claims = match state.token_service.validate_and_extract_claims(token) {
        Ok(claims) => claims,
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "Rejected bearer token");
            return None;
        }
    };

    let principal = claims.username().and_then(|username| {
        Ok(AuthenticatedPrincipal {
            username: username.to_string(),
            roles: claims.roles()?,
        })
    });
    let principal = match principal {
        Ok(principal) => principal,
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "Rejected bearer token");
            return None;
        }
    };

    let user = match state.user_service.get_by_username(&principal.username).await {
        Ok(Some(user)) if user.is_enabled() => user,
        Ok(Some(_)) => {
            warn!(username = %principal.username, "Token presented for disabled user");
            return None;
        }
        Ok(None) => {
            warn!(username = %principal.username, "Token presented for unknown user");
            return None;
        }
        Err(e) => {
            error!(username = %principal.username, error = %e, "User lookup failed");
            return None;
        }
    };

    if !state
        .token_service
        .can_be_refreshed(&claims, user.last_password_reset_at())
    {
        warn!(
            kind = "revoked",
            username = %principal.username,
            iat = claims.iat,
            last_password_reset = %user.last_password_reset_at(),
            "Token issued before last password reset"
        );
        return None;
    }

    Some(principal)
}

/// Token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Any authenticated user; 401 otherwise
#[derive(Debug, Clone)]
pub struct RequireUser(pub AuthenticatedPrincipal);

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedPrincipal>()
            .cloned()
            .map(RequireUser)
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}

/// Authenticated user holding `ROLE_ADMIN`; 401 or 403 otherwise
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthenticatedPrincipal);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireUser(principal) = RequireUser::from_request_parts(parts, state).await?;

        if !principal.is_admin() {
            warn!(username = %principal.username, "Admin role required");
            return Err(ApiError::forbidden("Admin role required"));
        }

        Ok(RequireAdmin(principal))
    }
}

/// The principal if the filter established one
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthenticatedPrincipal>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(
            parts.extensions.get::<AuthenticatedPrincipal>().cloned(),
        ))
    }
}
