use serde::Deserialize;

use crate::infrastructure::auth::JwtConfig;

/// Application configuration
///
/// Layered from `config/default`, then `config/local`, then `APP__*`
/// environment variables (e.g. `APP__JWT__EXPIRATION=900`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub jwt: JwtSettings,
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Session token settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct JwtSettings {
    /// Falls back to `JWT_SECRET`, then to a random per-process secret
    pub secret: Option<String>,
    /// Token lifetime in seconds
    pub expiration: u64,
    /// Seconds
    pub allowed_clock_skew: u64,
    pub issuer: String,
    pub audience: String,
}

/// Settings for calls to the bots' REST APIs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for JwtSettings {
    fn default() -> Self {
        let defaults = JwtConfig::default();

        Self {
            secret: None,
            expiration: defaults.expiration_secs,
            allowed_clock_skew: defaults.allowed_clock_skew_secs,
            issuer: defaults.issuer,
            audience: defaults.audience,
        }
    }
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &self.secret.as_ref().map(|_| "[hidden]"))
            .field("expiration", &self.expiration)
            .field("allowed_clock_skew", &self.allowed_clock_skew)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl JwtSettings {
    /// Token service configuration using the resolved signing secret
    pub fn to_jwt_config(&self, secret: impl Into<String>) -> JwtConfig {
        JwtConfig::new(secret, self.expiration)
            .with_clock_skew(self.allowed_clock_skew)
            .with_issuer(&self.issuer)
            .with_audience(&self.audience)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
