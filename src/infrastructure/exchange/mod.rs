//! Exchange config management
//!
//! Exchange configs are not stored locally. The service resolves the bot
//! from local storage and reads or writes the config through the bot's REST
//! API.

mod rest_repository;
mod service;

pub use rest_repository::RestExchangeConfigRepository;
pub use service::ExchangeConfigService;
