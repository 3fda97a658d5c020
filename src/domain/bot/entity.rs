//! Bot config entity

use serde::{Deserialize, Serialize};

use super::validation::{validate_base_url, validate_bot_id, BotValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};

/// Bot identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BotId(String);

impl BotId {
    pub fn new(id: impl Into<String>) -> Result<Self, BotValidationError> {
        let id = id.into();
        validate_bot_id(&id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BotId {
    type Error = BotValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BotId> for String {
    fn from(id: BotId) -> Self {
        id.0
    }
}

impl std::fmt::Display for BotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for BotId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Connection details for one bot's REST API
#[derive(Clone, Serialize, Deserialize)]
pub struct BotConfig {
    id: BotId,
    alias: String,
    base_url: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("id", &self.id)
            .field("alias", &self.alias)
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .finish()
    }
}

impl BotConfig {
    pub fn new(
        id: BotId,
        alias: impl Into<String>,
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, BotValidationError> {
        let alias = alias.into();
        let base_url = base_url.into();
        let username = username.into();

        if alias.trim().is_empty() {
            return Err(BotValidationError::EmptyAlias);
        }

        validate_base_url(&base_url)?;

        if username.is_empty() {
            return Err(BotValidationError::EmptyUsername);
        }

        Ok(Self {
            id,
            alias,
            base_url,
            username,
            password: password.into(),
        })
    }

    pub fn id(&self) -> &BotId {
        &self.id
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// URL of a resource on the bot's REST API
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl StorageEntity for BotConfig {
    type Key = BotId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
