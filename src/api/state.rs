//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::TokenService;
use crate::infrastructure::bot::BotConfigService;
use crate::infrastructure::exchange::ExchangeConfigService;
use crate::infrastructure::user::UserService;

/// Services shared by every handler; cheap to clone
#[derive(Debug, Clone)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
    pub user_service: Arc<UserService>,
    pub bot_service: Arc<BotConfigService>,
    pub exchange_service: Arc<ExchangeConfigService>,
}

impl AppState {
    pub fn new(
        token_service: Arc<TokenService>,
        user_service: Arc<UserService>,
        bot_service: Arc<BotConfigService>,
        exchange_service: Arc<ExchangeConfigService>,
    ) -> Self {
        Self {
            token_service,
            user_service,
            bot_service,
            exchange_service,
        }
    }
}
