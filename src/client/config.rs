use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};
use std::path::Path;
use std::time::Duration;

/// Client configuration wrapper.
///
/// Values come from, in order of precedence: an explicit builder, the
/// optional TOML file, `CLIENT_*` environment variables, built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    app: AppConfig,
}

/// Built-in defaults only; the environment is not consulted
impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
        }
    }
}

impl Config {
    /// Create a configuration from environment and defaults
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder())
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let env = Self::env_builder(|key| std::env::var(key).ok())?;
        let app = builder.or(env).build()?;
        Ok(Self { app })
    }

    /// Load a TOML file; keys mirror the builder fields
    /// (`server_url`, `broker_url`, `search_history_limit`, `request_timeout_secs`)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let builder: AppConfigBuilder = toml::from_str(&contents)?;
        Self::with_builder(builder)
    }

    fn env_builder(
        var: impl Fn(&'static str) -> Option<String>,
    ) -> Result<AppConfigBuilder, ConfigError> {
        let mut builder = AppConfig::builder();
        if let Some(url) = var("CLIENT_API_URL") {
            builder = builder.server_url(url);
        }
        if let Some(url) = var("CLIENT_BROKER_URL") {
            builder = builder.broker_url(url);
        }
        if let Some(limit) = var("CLIENT_SEARCH_HISTORY_LIMIT") {
            let parsed = limit.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CLIENT_SEARCH_HISTORY_LIMIT",
                value: limit.clone(),
            })?;
            builder = builder.search_history_limit(parsed);
        }
        Ok(builder)
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.server_url(), path)
        } else {
            format!("{}/{}", self.server_url(), path)
        }
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }

    pub fn broker_url(&self) -> &str {
        &self.app.broker_url
    }

    pub fn search_history_limit(&self) -> usize {
        self.app.search_history_limit
    }

    pub fn request_timeout(&self) -> Duration {
        self.app.request_timeout
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }
}
