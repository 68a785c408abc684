use std::time::Duration;

use reqwest::Url;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Environment variable overriding the request/response base URL
pub const ENV_API_BASE: &str = "CHAT_API_BASE";
/// Environment variable overriding the push channel base URL
pub const ENV_PUSH_URL: &str = "CHAT_PUSH_URL";
/// Environment variable overriding the business identity
pub const ENV_BUSINESS_ID: &str = "CHAT_BUSINESS_ID";
/// Environment variable overriding the request timeout, in seconds
pub const ENV_REQUEST_TIMEOUT: &str = "CHAT_REQUEST_TIMEOUT_SECS";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to the local
    /// development defaults for anything it does not provide
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();
        if let Some(url) = lookup(ENV_API_BASE) {
            builder = builder.api_base(url);
        }
        if let Some(url) = lookup(ENV_PUSH_URL) {
            builder = builder.push_url(url);
        }
        if let Some(id) = lookup(ENV_BUSINESS_ID) {
            builder = builder.business_id(id);
        }
        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                field: "request_timeout",
                message: format!("{:?} is not a number of seconds", raw),
            })?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }
        Self::with_builder(builder)
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self { app: builder.build()? })
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn into_app(self) -> AppConfig {
        self.app
    }

    /// Get the full URL for an API path such as `/messages/conversations`
    pub fn api_url(&self, path: &str) -> Url {
        self.app.api_endpoint(&split_path(path))
    }

    /// Get the full URL for a push channel path such as `/events`
    pub fn push_url(&self, path: &str) -> Url {
        self.app.push_endpoint(&split_path(path))
    }

    pub fn business_id(&self) -> &str {
        &self.app.business_id
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
