use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid ID format: {message}")]
    InvalidId { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Bot API error: {bot} - {message}")]
    Provider { bot: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }

    /// Error reported by (or while talking to) a bot's REST API
    pub fn provider(bot: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            bot: bot.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Bot 'bitstamp' not found");
        assert_eq!(error.to_string(), "Not found: Bot 'bitstamp' not found");
    }

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("gdax", "connection refused");
        assert_eq!(error.to_string(), "Bot API error: gdax - connection refused");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Bot 'gdax' already exists");
        assert_eq!(error.to_string(), "Conflict: Bot 'gdax' already exists");
    }
}
