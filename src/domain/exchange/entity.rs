//! Exchange config payload, in the shape the bot REST API exchanges it

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Exchange adapter configuration of a single bot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeConfig {
    pub exchange_name: String,
    pub exchange_adapter: String,
    /// API key/secret pairs; the bot masks these on read
    #[serde(default)]
    pub authentication_config: BTreeMap<String, String>,
    #[serde(default)]
    pub network_config: NetworkConfig,
    #[serde(default)]
    pub other_config: BTreeMap<String, String>,
}

/// Network settings used by the exchange adapter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Seconds
    #[serde(default)]
    pub connection_timeout: u32,
    #[serde(default)]
    pub non_fatal_error_codes: Vec<u16>,
    #[serde(default)]
    pub non_fatal_error_messages: Vec<String>,
}
