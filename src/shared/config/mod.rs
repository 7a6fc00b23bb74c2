//! Application configuration module
//!
//! Provides the validated configuration shared by the HTTP client, the
//! realtime channel and the local caches.

use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Default REST base URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
/// Default message-broker endpoint
pub const DEFAULT_BROKER_URL: &str = "ws://127.0.0.1:8080/ws-stomp";
/// Default number of recent search terms kept per feature
pub const DEFAULT_SEARCH_HISTORY_LIMIT: usize = 10;
/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// REST base URL, without trailing slash
    pub server_url: String,
    /// Broker endpoint used by the realtime QnA channel
    pub broker_url: String,
    /// Recent-search cap per feature
    pub search_history_limit: usize,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            broker_url: DEFAULT_BROKER_URL.to_string(),
            search_history_limit: DEFAULT_SEARCH_HISTORY_LIMIT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.server_url).map_err(|_| ConfigError::InvalidUrl(self.server_url.clone()))?;
        Url::parse(&self.broker_url).map_err(|_| ConfigError::InvalidUrl(self.broker_url.clone()))?;
        if self.search_history_limit == 0 {
            return Err(ConfigError::MissingValue("search_history_limit"));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_secs",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    broker_url: Option<String>,
    search_history_limit: Option<usize>,
    request_timeout_secs: Option<u64>,
}

impl AppConfigBuilder {
    /// Set the REST base URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the broker endpoint
    pub fn broker_url(mut self, url: impl Into<String>) -> Self {
        self.broker_url = Some(url.into());
        self
    }

    /// Set the recent-search cap
    pub fn search_history_limit(mut self, limit: usize) -> Self {
        self.search_history_limit = Some(limit);
        self
    }

    /// Set the request timeout in seconds
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Fill unset fields from another builder
    pub fn or(self, fallback: AppConfigBuilder) -> Self {
        Self {
            server_url: self.server_url.or(fallback.server_url),
            broker_url: self.broker_url.or(fallback.broker_url),
            search_history_limit: self.search_history_limit.or(fallback.search_history_limit),
            request_timeout_secs: self.request_timeout_secs.or(fallback.request_timeout_secs),
        }
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            server_url: self
                .server_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.server_url),
            broker_url: self.broker_url.unwrap_or(defaults.broker_url),
            search_history_limit: self
                .search_history_limit
                .unwrap_or(defaults.search_history_limit),
            request_timeout: self
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}
