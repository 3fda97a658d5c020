//! BX-bot UI server
//!
//! Authentication and configuration-management backend for the BX-bot web
//! control panel:
//! - HS512 JWT session tokens with expiry, refresh and revocation on
//!   password reset
//! - Bot config CRUD over local storage
//! - Exchange config get/update, proxied to each bot's REST API

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::bot::BotConfig;
use domain::user::{Role, User};
use infrastructure::{
    auth::{Clock, SystemClock, TokenService},
    bot::BotConfigService,
    exchange::{ExchangeConfigService, RestExchangeConfigRepository},
    storage::InMemoryStorage,
    user::{Argon2Hasher, CreateUserRequest, StorageUserRepository, UserService},
};
use rand::Rng;
use tracing::{info, warn};

const INITIAL_ADMIN_USERNAME: &str = "admin";

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let secret = resolve_jwt_secret(config);
    let token_service = Arc::new(
        TokenService::new(config.jwt.to_jwt_config(secret)).with_clock(clock.clone()),
    );
    info!(
        expiration_secs = config.jwt.expiration,
        allowed_clock_skew_secs = config.jwt.allowed_clock_skew,
        issuer = %config.jwt.issuer,
        "Token service configured"
    );

    let user_storage = Arc::new(InMemoryStorage::<User>::new());
    let user_service = Arc::new(UserService::new(
        Arc::new(StorageUserRepository::new(user_storage)),
        Arc::new(Argon2Hasher::new()),
    )
    .with_clock(clock));
    create_initial_admin_user(&user_service).await?;

    let bot_storage = Arc::new(InMemoryStorage::<BotConfig>::new());
    let bot_service = Arc::new(BotConfigService::new(bot_storage.clone()));

    let exchange_repository =
        RestExchangeConfigRepository::new(Duration::from_secs(config.remote.timeout_secs))?;
    let exchange_service = Arc::new(ExchangeConfigService::new(
        bot_storage,
        Arc::new(exchange_repository),
    ));

    Ok(AppState::new(
        token_service,
        user_service,
        bot_service,
        exchange_service,
    ))
}

/// Signing secret from config, then `JWT_SECRET`, then a random per-process value
fn resolve_jwt_secret(config: &AppConfig) -> String {
    config
        .jwt
        .secret
        .clone()
        .filter(|secret| !secret.is_empty())
        .or_else(|| std::env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| {
            warn!(
                "No jwt.secret or JWT_SECRET configured. Generating random secret; \
                sessions will not survive a restart."
            );
            random_alphanumeric(64)
        })
}

fn random_alphanumeric(len: usize) -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Create an `admin` user when the directory is empty
///
/// The password comes from `ADMIN_DEFAULT_PASSWORD`, or is generated and
/// logged once.
async fn create_initial_admin_user(user_service: &UserService) -> anyhow::Result<()> {
    if user_service.count().await? > 0 {
        return Ok(());
    }

    let (password, from_env) = match std::env::var("ADMIN_DEFAULT_PASSWORD") {
        Ok(p) if !p.is_empty() => (p, true),
        _ => (random_alphanumeric(16), false),
    };

    user_service
        .create(CreateUserRequest {
            username: INITIAL_ADMIN_USERNAME.to_string(),
            password: password.clone(),
            roles: vec![Role::admin(), Role::user()],
        })
        .await?;

    info!("===========================================");
    info!("Initial admin user created");
    info!("Username: {}", INITIAL_ADMIN_USERNAME);

    if from_env {
        info!("Password: (set via ADMIN_DEFAULT_PASSWORD)");
    } else {
        info!("Password: {}", password);
    }

    info!("Please change this password after first login.");
    info!("===========================================");

    Ok(())
}
