//! Runtime configuration loaded from environment variables
//!
//! | variable             | default                         |
//! |----------------------|---------------------------------|
//! | `FEED_URL`           | `https://api.github.com/events` |
//! | `FEED_USER_AGENT`    | `github-event-fetcher`          |
//! | `FEED_TIMEOUT_SECS`  | `30`                            |
//! | `POLL_INTERVAL_SECS` | `10`                            |
//! | `HTTP_HOST`          | `0.0.0.0`                       |
//! | `HTTP_PORT`          | `8000`                          |

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_FEED_URL: &str = "https://api.github.com/events";
pub const DEFAULT_USER_AGENT: &str = "github-event-fetcher";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Remote feed settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub url: String,
    /// Sent as `User-Agent` on every request
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed: FeedConfig,
    /// Fixed wait between fetch cycles
    pub poll_interval: Duration,
    pub http_host: String,
    pub http_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            http_host: "0.0.0.0".to_string(),
            http_port: 8000,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let poll_secs: u64 = parse_or(&lookup, "POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS)?;
        if poll_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "POLL_INTERVAL_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            feed: FeedConfig {
                url: lookup("FEED_URL").unwrap_or(defaults.feed.url),
                user_agent: lookup("FEED_USER_AGENT").unwrap_or(defaults.feed.user_agent),
                timeout_secs: parse_or(&lookup, "FEED_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            },
            poll_interval: Duration::from_secs(poll_secs),
            http_host: lookup("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port: parse_or(&lookup, "HTTP_PORT", defaults.http_port)?,
        })
    }

    /// `host:port` the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
