//! Exchange domain
//!
//! Exchange configuration lives on each bot and is read and written through
//! the bot's own REST API.

mod entity;
mod repository;

pub use entity::{ExchangeConfig, NetworkConfig};
pub use repository::ExchangeConfigRepository;

#[cfg(test)]
pub use repository::MockExchangeConfigRepository;
