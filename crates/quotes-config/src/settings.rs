//! Configuration structures.

use config::ConfigError;
use quotes_core::types::{DateStyle, DEFAULT_DAYS};
use quotes_data::{RetryPolicy, SourceConfig, DEFAULT_CACHE_DIR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub retry: RetrySettings,
    #[serde(default)]
    pub cache: CacheSettings,
}

impl AppConfig {
    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Reject values that deserialize but cannot drive a fetch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::Message(
                "retry.max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "quotes".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Upstream data source endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    pub page_url: String,
    pub download_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl SourceSettings {
    pub fn to_source_config(&self) -> SourceConfig {
        SourceConfig {
            page_url: self.page_url.clone(),
            download_url: self.download_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        let source = SourceConfig::default();
        Self {
            page_url: source.page_url,
            download_url: source.download_url,
            timeout_secs: source.timeout.as_secs(),
            user_agent: source.user_agent,
        }
    }
}

/// Download retry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    pub max_attempts: u32,
    /// Sleep after the n-th failure is `n * backoff_step_secs`; 0 disables sleeping.
    pub backoff_step_secs: u64,
}

impl RetrySettings {
    pub fn to_policy(&self) -> RetryPolicy {
        if self.backoff_step_secs == 0 {
            RetryPolicy::immediate(self.max_attempts)
        } else {
            RetryPolicy::linear(
                self.max_attempts,
                Duration::from_secs(self.backoff_step_secs),
            )
        }
    }
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff_step_secs: 2,
        }
    }
}

/// Cache file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub dir: PathBuf,
    pub date_style: DateStyle,
    pub default_days: u32,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_CACHE_DIR),
            date_style: DateStyle::default(),
            default_days: DEFAULT_DAYS,
        }
    }
}
