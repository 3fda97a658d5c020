//! Bot config service

use std::sync::Arc;

use tracing::info;

use crate::domain::bot::{BotConfig, BotId};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// CRUD over the locally stored bot configs
#[derive(Debug, Clone)]
pub struct BotConfigService {
    storage: Arc<dyn Storage<BotConfig>>,
}

impl BotConfigService {
    pub fn new(storage: Arc<dyn Storage<BotConfig>>) -> Self {
        Self { storage }
    }

    /// All bots, ordered by id
    pub async fn get_all(&self) -> Result<Vec<BotConfig>, DomainError> {
        let mut bots = self.storage.list().await?;
        bots.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(bots)
    }

    pub async fn get(&self, id: &str) -> Result<Option<BotConfig>, DomainError> {
        let bot_id = parse_id(id)?;
        self.storage.get(&bot_id).await
    }

    pub async fn create(&self, config: BotConfig) -> Result<BotConfig, DomainError> {
        if self.storage.exists(config.id()).await? {
            return Err(DomainError::conflict(format!(
                "Bot '{}' already exists",
                config.id()
            )));
        }

        let created = self.storage.create(config).await?;
        info!(bot_id = %created.id(), alias = created.alias(), "Created bot config");
        Ok(created)
    }

    pub async fn update(&self, config: BotConfig) -> Result<BotConfig, DomainError> {
        if !self.storage.exists(config.id()).await? {
            return Err(DomainError::not_found(format!(
                "Bot '{}' not found",
                config.id()
            )));
        }

        let updated = self.storage.update(config).await?;
        info!(bot_id = %updated.id(), alias = updated.alias(), "Updated bot config");
        Ok(updated)
    }

    /// Remove a bot, returning the removed config if there was one
    pub async fn delete(&self, id: &str) -> Result<Option<BotConfig>, DomainError> {
        let bot_id = parse_id(id)?;
        let removed = self.storage.delete(&bot_id).await?;

        if removed.is_some() {
            info!(bot_id = %bot_id, "Deleted bot config");
        }

        Ok(removed)
    }
}

fn parse_id(id: &str) -> Result<BotId, DomainError> {
    BotId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))
}
