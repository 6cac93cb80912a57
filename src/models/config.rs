//! Application configuration structures.
//!
//! Tunables live in an optional TOML file; endpoints and secrets are
//! overlaid from the environment by `crate::config`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client and fan-out behavior
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Content API endpoint and credentials
    #[serde(default)]
    pub feed: FeedConfig,

    /// Stamp detector endpoint
    #[serde(default)]
    pub stamper: StamperConfig,

    /// Poll loop timing
    #[serde(default)]
    pub poll: PollConfig,

    /// Liveness HTTP endpoint
    #[serde(default)]
    pub server: ServerConfig,

    /// Outbound notification sinks
    #[serde(default)]
    pub notify: NotifyConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!(
                path = ?path.as_ref(),
                error = %e,
                "config load failed, using defaults"
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::config("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::config("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.max_concurrent == 0 {
            return Err(AppError::config("crawler.max_concurrent must be > 0"));
        }
        if self.feed.api_root.trim().is_empty() {
            return Err(AppError::config("feed.api_root is not set"));
        }
        if self.feed.api_key.trim().is_empty() {
            return Err(AppError::config("feed.api_key is not set"));
        }
        if self.stamper.host.trim().is_empty() {
            return Err(AppError::config("stamper.host is not set"));
        }
        if self.poll.interval_ms == 0 {
            return Err(AppError::config("poll.interval_ms must be > 0"));
        }
        if self.poll.lookback_secs == 0 {
            return Err(AppError::config("poll.lookback_secs must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client and fan-out behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent requests per fan-out stage
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Content API endpoint and credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Root URL of the content API, e.g. `https://api.example.com`
    #[serde(default)]
    pub api_root: String,

    /// API key sent as the `apiKey` query parameter
    #[serde(default)]
    pub api_key: String,
}

/// Stamp detector endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StamperConfig {
    #[serde(default = "defaults::stamper_host")]
    pub host: String,

    #[serde(default = "defaults::stamper_port")]
    pub port: u16,
}

impl StamperConfig {
    /// The detector's read endpoint.
    pub fn read_url(&self) -> String {
        format!("http://{}:{}/read", self.host, self.port)
    }
}

impl Default for StamperConfig {
    fn default() -> Self {
        Self {
            host: defaults::stamper_host(),
            port: defaults::stamper_port(),
        }
    }
}

/// Poll loop timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Tick interval in milliseconds
    #[serde(default = "defaults::interval_ms")]
    pub interval_ms: u64,

    /// How far the very first cycle looks back, in seconds
    #[serde(default = "defaults::lookback_secs")]
    pub lookback_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: defaults::interval_ms(),
            lookback_secs: defaults::lookback_secs(),
        }
    }
}

/// Liveness HTTP endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "defaults::server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: defaults::server_port(),
        }
    }
}

/// Outbound notification sinks. A sink with no URL configured is disabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Chat webhook URL (Slack-style `{"text": ...}` payload)
    #[serde(default)]
    pub chat_webhook_url: Option<String>,

    /// Task tracker API root, e.g. `https://app.example.com/api/1.0`
    #[serde(default)]
    pub task_api_url: Option<String>,

    /// Bearer token for the task tracker
    #[serde(default)]
    pub task_api_token: Option<String>,

    /// Project the review tasks are filed under
    #[serde(default)]
    pub task_project: Option<String>,
}

mod defaults {
    pub fn user_agent() -> String {
        format!("stampwatch/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn timeout() -> u64 {
        30
    }

    pub fn max_concurrent() -> usize {
        8
    }

    pub fn stamper_host() -> String {
        "localhost".to_string()
    }

    pub fn stamper_port() -> u16 {
        8080
    }

    pub fn interval_ms() -> u64 {
        15_000
    }

    pub fn lookback_secs() -> u64 {
        3_600
    }

    pub fn server_port() -> u16 {
        3_000
    }
}
