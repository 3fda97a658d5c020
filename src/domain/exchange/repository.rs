//! Remote exchange config repository trait

use async_trait::async_trait;

use super::entity::ExchangeConfig;
use crate::domain::bot::BotConfig;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Reads and writes a bot's exchange config on the bot itself
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExchangeConfigRepository: Send + Sync {
    /// Fetch the exchange config currently used by `bot`
    async fn get(&self, bot: &BotConfig) -> Result<ExchangeConfig, DomainError>;

    /// Push a new exchange config to `bot`, returning what the bot stored
    async fn save(
        &self,
        bot: &BotConfig,
        config: ExchangeConfig,
    ) -> Result<ExchangeConfig, DomainError>;
}
