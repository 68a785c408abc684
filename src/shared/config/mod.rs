//! Application configuration module
//!
//! `AppConfig` holds the endpoints and identity the client runs with. It is
//! only constructed through [`AppConfigBuilder`], which validates every value.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Default base URL for request/response calls
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Default base URL for the push channel
pub const DEFAULT_PUSH_URL: &str = "http://localhost:5000";

/// Default business number messages are sent from
pub const DEFAULT_BUSINESS_ID: &str = "918329446654";

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL for `/messages` calls
    pub api_base: Url,
    /// Base URL for the push channel
    pub push_url: Url,
    /// Address every outgoing message is sent from
    pub business_id: String,
    /// Timeout applied to each request/response call
    pub request_timeout: Duration,
    /// Select the first conversation once the initial list arrives
    pub auto_select_first: bool,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// URL below the API base, one path segment per element
    pub fn api_endpoint(&self, segments: &[&str]) -> Url {
        join_segments(&self.api_base, segments)
    }

    /// URL below the push channel base
    pub fn push_endpoint(&self, segments: &[&str]) -> Url {
        join_segments(&self.push_url, segments)
    }
}

/// Segments are percent-encoded, so conversation ids never escape their slot.
fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_base: Option<String>,
    push_url: Option<String>,
    business_id: Option<String>,
    request_timeout: Option<Duration>,
    auto_select_first: Option<bool>,
}

impl AppConfigBuilder {
    /// Set the API base URL
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = Some(url.into());
        self
    }

    /// Set the push channel URL
    pub fn push_url(mut self, url: impl Into<String>) -> Self {
        self.push_url = Some(url.into());
        self
    }

    /// Set the business identity
    pub fn business_id(mut self, id: impl Into<String>) -> Self {
        self.business_id = Some(id.into());
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn auto_select_first(mut self, enabled: bool) -> Self {
        self.auto_select_first = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let api_base = parse_base_url(self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE))?;
        let push_url = parse_base_url(self.push_url.as_deref().unwrap_or(DEFAULT_PUSH_URL))?;

        let business_id = self
            .business_id
            .unwrap_or_else(|| DEFAULT_BUSINESS_ID.to_string())
            .trim()
            .to_string();
        if business_id.is_empty() {
            return Err(ConfigError::MissingValue("business_id"));
        }

        let request_timeout = self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        if request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(AppConfig {
            api_base,
            push_url,
            business_id,
            request_timeout,
            auto_select_first: self.auto_select_first.unwrap_or(true),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(format!("{}: expected an http(s) base URL", raw)));
    }
    Ok(url)
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}
