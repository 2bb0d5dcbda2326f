//! Service configuration
//!
//! Everything the service needs to know about its environment lives in
//! [`AppConfig`], built once at startup and handed to the upstream client,
//! the store and the server.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default chat-completion endpoint
pub const DEFAULT_UPSTREAM_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier sent with every completion request
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3.1:free";

/// System instruction prepended to every question
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant who provides concise answers.";

/// Default value of the `HTTP-Referer` header
pub const DEFAULT_SITE_URL: &str = "http://localhost:8000";

/// Default value of the `X-Title` header
pub const DEFAULT_APP_NAME: &str = "FAQ Bot";

pub const DEFAULT_DB_PATH: &str = "faq.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Upstream request timeout
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Settings for the upstream chat-completion API
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// API credential; `None` is tolerated at startup but fails every request
    pub api_key: Option<String>,
    /// Chat-completion endpoint URL
    pub url: String,
    /// Model identifier
    pub model: String,
    /// Sent as `HTTP-Referer`
    pub site_url: String,
    /// Sent as `X-Title`
    pub app_name: String,
    /// Total request timeout
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            url: DEFAULT_UPSTREAM_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            timeout: UPSTREAM_TIMEOUT,
        }
    }
}

impl UpstreamConfig {
    /// Set the API credential
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a different endpoint
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The credential, if one is configured and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}

/// Top-level service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub upstream: UpstreamConfig,
    /// SQLite database file
    pub db_path: PathBuf,
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upstream: UpstreamConfig::default(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

impl AppConfig {
    /// Build the configuration from process environment variables
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let upstream = UpstreamConfig {
            api_key: lookup("OPENROUTER_API_KEY"),
            url: var("OPENROUTER_URL", DEFAULT_UPSTREAM_URL),
            model: var("OPENROUTER_MODEL", DEFAULT_MODEL),
            site_url: var("FAQ_SITE_URL", DEFAULT_SITE_URL),
            app_name: var("FAQ_APP_NAME", DEFAULT_APP_NAME),
            timeout: UPSTREAM_TIMEOUT,
        };

        let bind = var("FAQ_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                source,
            })?;

        Ok(Self {
            upstream,
            db_path: PathBuf::from(var("FAQ_DB_PATH", DEFAULT_DB_PATH)),
            bind_addr,
        })
    }
}
