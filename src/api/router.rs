use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth;
use super::config;
use super::health;
use super::middleware::{jwt_authentication_filter, logging_middleware};
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(auth::create_auth_router())
        .nest("/config", config::create_config_router());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            jwt_authentication_filter,
        ))
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
