//! Bot config management backed by local storage

mod service;

pub use service::BotConfigService;
