//! Exchange config service

use std::sync::Arc;

use tracing::info;

use crate::domain::bot::{BotConfig, BotId};
use crate::domain::exchange::{ExchangeConfig, ExchangeConfigRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Gets and updates a bot's exchange config by bot id
#[derive(Clone)]
pub struct ExchangeConfigService {
    bots: Arc<dyn Storage<BotConfig>>,
    repository: Arc<dyn ExchangeConfigRepository>,
}

impl std::fmt::Debug for ExchangeConfigService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeConfigService")
            .field("bots", &self.bots)
            .finish_non_exhaustive()
    }
}

impl ExchangeConfigService {
    pub fn new(
        bots: Arc<dyn Storage<BotConfig>>,
        repository: Arc<dyn ExchangeConfigRepository>,
    ) -> Self {
        Self { bots, repository }
    }

    pub async fn get(&self, bot_id: &str) -> Result<ExchangeConfig, DomainError> {
        let bot = self.resolve_bot(bot_id).await?;
        self.repository.get(&bot).await
    }

    pub async fn update(
        &self,
        bot_id: &str,
        config: ExchangeConfig,
    ) -> Result<ExchangeConfig, DomainError> {
        let bot = self.resolve_bot(bot_id).await?;
        let saved = self.repository.save(&bot, config).await?;

        info!(
            bot_id,
            exchange = %saved.exchange_name,
            "Updated exchange config"
        );
        Ok(saved)
    }

    async fn resolve_bot(&self, bot_id: &str) -> Result<BotConfig, DomainError> {
        let id = BotId::new(bot_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        self.bots
            .get(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Bot '{}' not found", bot_id)))
    }
}
