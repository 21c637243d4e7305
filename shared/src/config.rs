//! Configuration management for the race alert Lambda.

use std::env;
use std::time::Duration;

use crate::{Error, Result};

/// Season checked when `RACE_SEASON` is not set.
pub const DEFAULT_SEASON: i32 = 2025;
/// Public OpenF1 API.
pub const DEFAULT_OPENF1_BASE_URL: &str = "https://api.openf1.org/v1";
/// Per-request timeout for OpenF1 calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// ARN of the SNS topic alerts are published to
    pub sns_topic_arn: String,
    /// Season year whose calendar is fetched
    pub season: i32,
    /// OpenF1 API base URL, without trailing slash
    pub openf1_base_url: String,
    /// Timeout applied to every outbound OpenF1 request
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Fails if the topic ARN is missing or blank, or if a numeric setting
    /// does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sns_topic_arn = lookup("SNS_TOPIC_ARN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::Config("SNS_TOPIC_ARN not set".to_string()))?;

        let season = match lookup("RACE_SEASON") {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|e| Error::Config(format!("Invalid RACE_SEASON '{}': {}", raw, e)))?,
            None => DEFAULT_SEASON,
        };

        let openf1_base_url = lookup("OPENF1_BASE_URL")
            .unwrap_or_else(|| DEFAULT_OPENF1_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match lookup("OPENF1_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                Error::Config(format!("Invalid OPENF1_TIMEOUT_SECS '{}': {}", raw, e))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            sns_topic_arn,
            season,
            openf1_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
