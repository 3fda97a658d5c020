//! Bot config validation

use thiserror::Error;

/// Errors raised while validating a bot config
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BotValidationError {
    #[error("Bot ID cannot be empty")]
    EmptyId,

    #[error("Bot ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("Bot ID contains invalid character: '{0}'. Only alphanumeric characters, hyphens and underscores are allowed")]
    InvalidIdCharacter(char),

    #[error("Bot alias cannot be empty")]
    EmptyAlias,

    #[error("Bot base URL must start with http:// or https://: '{0}'")]
    InvalidBaseUrl(String),

    #[error("Bot username cannot be empty")]
    EmptyUsername,
}

const MAX_BOT_ID_LENGTH: usize = 50;

/// Validate a bot ID: 1-50 characters of `[A-Za-z0-9_-]`
pub fn validate_bot_id(id: &str) -> Result<(), BotValidationError> {
    if id.is_empty() {
        return Err(BotValidationError::EmptyId);
    }

    if id.len() > MAX_BOT_ID_LENGTH {
        return Err(BotValidationError::IdTooLong(MAX_BOT_ID_LENGTH));
    }

    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(BotValidationError::InvalidIdCharacter(c));
    }

    Ok(())
}

/// Validate the base URL of a bot's REST API
pub fn validate_base_url(url: &str) -> Result<(), BotValidationError> {
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| BotValidationError::InvalidBaseUrl(url.to_string()))?;

    if host.is_empty() || host.starts_with('/') {
        return Err(BotValidationError::InvalidBaseUrl(url.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bot_ids() {
        assert!(validate_bot_id("gdax").is_ok());
        assert!(validate_bot_id("bitstamp-eur_2").is_ok());
    }

    #[test]
    fn test_invalid_bot_ids() {
        assert_eq!(validate_bot_id(""), Err(BotValidationError::EmptyId));
        assert_eq!(
            validate_bot_id(&"a".repeat(51)),
            Err(BotValidationError::IdTooLong(50))
        );
        assert_eq!(
            validate_bot_id("bot/1"),
            Err(BotValidationError::InvalidIdCharacter('/'))
        );
    }

    #[test]
    fn test_base_url() {
        assert!(validate_base_url("https://bot.example.com/api").is_ok());
        assert!(validate_base_url("http://localhost:8080").is_ok());
        assert!(validate_base_url("ftp://bot.example.com").is_err());
        assert!(validate_base_url("https://").is_err());
        assert!(validate_base_url("https:///api").is_err());
    }
}
