//! Bot domain
//!
//! A bot config records where a trading bot's REST API lives and the
//! credentials the UI server uses to talk to it.

mod entity;
mod validation;

pub use entity::{BotConfig, BotId};
pub use validation::{validate_base_url, validate_bot_id, BotValidationError};
