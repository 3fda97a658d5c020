//! Exchange config repository that talks to the bot's REST API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, warn};

use crate::domain::bot::BotConfig;
use crate::domain::exchange::{ExchangeConfig, ExchangeConfigRepository};
use crate::domain::DomainError;

const EXCHANGE_CONFIG_PATH: &str = "config/exchange";

/// Reads and writes `{base_url}/config/exchange` with HTTP basic auth
#[derive(Debug, Clone)]
pub struct RestExchangeConfigRepository {
    client: Client,
}

impl RestExchangeConfigRepository {
    pub fn new(timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn execute(
        &self,
        bot: &BotConfig,
        request: RequestBuilder,
    ) -> Result<ExchangeConfig, DomainError> {
        let bot_id = bot.id().as_str();

        let response = request
            .basic_auth(bot.username(), Some(bot.password()))
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "Request timed out".to_string()
                } else if e.is_connect() {
                    "Connection failed".to_string()
                } else {
                    format!("Request failed: {}", e)
                };
                warn!(bot_id, error = %e, "Bot API request failed");
                DomainError::provider(bot_id, message)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(bot_id, status = status.as_u16(), "Bot API returned error status");
            return Err(DomainError::provider(
                bot_id,
                format!("HTTP {}: {}", status, body),
            ));
        }

        response.json().await.map_err(|e| {
            DomainError::provider(bot_id, format!("Failed to parse exchange config: {}", e))
        })
    }
}

#[async_trait]
impl ExchangeConfigRepository for RestExchangeConfigRepository {
    async fn get(&self, bot: &BotConfig) -> Result<ExchangeConfig, DomainError> {
        let url = bot.endpoint(EXCHANGE_CONFIG_PATH);
        debug!(bot_id = %bot.id(), %url, "Fetching exchange config");

        self.execute(bot, self.client.get(&url)).await
    }

    async fn save(
        &self,
        bot: &BotConfig,
        config: ExchangeConfig,
    ) -> Result<ExchangeConfig, DomainError> {
        let url = bot.endpoint(EXCHANGE_CONFIG_PATH);
        debug!(bot_id = %bot.id(), %url, "Updating exchange config");

        self.execute(bot, self.client.put(&url).json(&config)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bot::BotId;
    use serde_json::json;
    use wiremock::matchers::{basic_auth, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn bot_at(server: &MockServer) -> BotConfig {
        BotConfig::new(
            BotId::new("bitstamp").unwrap(),
            "Bitstamp",
            format!("{}/api", server.uri()),
            "bxbot",
            "bot-password",
        )
        .unwrap()
    }

    fn repository() -> RestExchangeConfigRepository {
        RestExchangeConfigRepository::new(Duration::from_secs(5)).unwrap()
    }

    fn payload() -> serde_json::Value {
        json!({
            "exchangeName": "Bitstamp",
            "exchangeAdapter": "com.gazbert.bxbot.exchanges.BitstampExchangeAdapter",
            "authenticationConfig": {"api-key": "****"},
            "networkConfig": {
                "connectionTimeout": 30,
                "nonFatalErrorCodes": [502, 503],
                "nonFatalErrorMessages": ["Connection refused"]
            },
            "otherConfig": {"buy-fee": "0.25"}
        })
    }

    #[tokio::test]
    async fn test_get_sends_basic_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/config/exchange"))
            .and(basic_auth("bxbot", "bot-password"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload()))
            .expect(1)
            .mount(&server)
            .await;

        let config = repository().get(&bot_at(&server)).await.unwrap();

        assert_eq!(config.exchange_name, "Bitstamp");
        assert_eq!(config.network_config.non_fatal_error_codes, vec![502, 503]);
        assert_eq!(
            config.other_config.get("buy-fee").map(String::as_str),
            Some("0.25")
        );
    }

    #[tokio::test]
    async fn test_save_puts_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/config/exchange"))
            .and(body_json(payload()))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload()))
            .expect(1)
            .mount(&server)
            .await;

        let config: ExchangeConfig = serde_json::from_value(payload()).unwrap();
        let saved = repository().save(&bot_at(&server), config.clone()).await.unwrap();

        assert_eq!(saved, config);
    }

    #[tokio::test]
    async fn test_error_status_maps_to_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/config/exchange"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Bad credentials"))
            .mount(&server)
            .await;

        let result = repository().get(&bot_at(&server)).await;

        match result {
            Err(DomainError::Provider { bot, message }) => {
                assert_eq!(bot, "bitstamp");
                assert!(message.contains("401"));
                assert!(message.contains("Bad credentials"));
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_body_maps_to_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = repository().get(&bot_at(&server)).await;
        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_bot() {
        let bot = BotConfig::new(
            BotId::new("offline").unwrap(),
            "Offline",
            "http://127.0.0.1:9",
            "bxbot",
            "bot-password",
        )
        .unwrap();

        let result = repository().get(&bot).await;
        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }
}
