//! Configuration handling for the scraper.
//!
//! Values come from environment variables with defaults pointing at the
//! public Lord of the Mysteries wiki. CLI flags layer on top via the
//! `with_*` builders.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Environment variable names.
pub const ENV_BASE_URL: &str = "MYSTIC_BASE_URL";
pub const ENV_CONCURRENCY: &str = "MYSTIC_CONCURRENCY";
pub const ENV_MAX_ATTEMPTS: &str = "MYSTIC_MAX_ATTEMPTS";
pub const ENV_RETRY_BASE_MS: &str = "MYSTIC_RETRY_BASE_MS";

const DEFAULT_BASE_URL: &str = "https://lordofthemysteries.fandom.com/wiki/";
const DEFAULT_CONCURRENCY: usize = 4;
const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_BASE_MS: u64 = 500;

/// Scraper runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    concurrency: usize,
    max_attempts: u32,
    retry_base: Duration,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if url::Url::parse(&base_url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: ENV_BASE_URL,
                reason: format!("not an absolute url: {base_url}"),
            });
        }

        let concurrency = parse_var(ENV_CONCURRENCY, DEFAULT_CONCURRENCY)?;
        let max_attempts = parse_var(ENV_MAX_ATTEMPTS, DEFAULT_MAX_ATTEMPTS)?;
        let retry_base_ms = parse_var(ENV_RETRY_BASE_MS, DEFAULT_RETRY_BASE_MS)?;

        if concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_CONCURRENCY,
                reason: "must be at least 1".to_string(),
            });
        }
        if max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_MAX_ATTEMPTS,
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            base_url,
            concurrency,
            max_attempts,
            retry_base: Duration::from_millis(retry_base_ms),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_retry_base(mut self, retry_base: Duration) -> Self {
        self.retry_base = retry_base;
        self
    }

    /// Article URL prefix; character identifiers are appended to it.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
    /// Maximum characters fetched at once.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
    /// First retry delay; later retries double it.
    pub fn retry_base(&self) -> Duration {
        self.retry_base
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_base: Duration::from_millis(DEFAULT_RETRY_BASE_MS),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
