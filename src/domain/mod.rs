//! Domain layer - Core entities and repository traits

pub mod bot;
pub mod error;
pub mod exchange;
pub mod storage;
pub mod user;

pub use bot::{BotConfig, BotId, BotValidationError};
pub use error::DomainError;
pub use exchange::{ExchangeConfig, ExchangeConfigRepository, NetworkConfig};
pub use storage::{Storage, StorageEntity, StorageKey};
pub use user::{Role, User, UserRepository, UserValidationError, Username};
