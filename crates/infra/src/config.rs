//! Configuration loading and representation.
//!
//! Everything comes from environment variables; unset variables fall back to
//! defaults. The diagnostic log format is read by the binary itself.

use core::str::FromStr;

use storefront_products::DEFAULT_PRICE_THRESHOLD;
use thiserror::Error;

pub const ENV_PRICE_THRESHOLD: &str = "STOREFRONT_PRICE_THRESHOLD";
pub const ENV_OUTPUT: &str = "STOREFRONT_OUTPUT";
pub const ENV_NOTIFICATIONS: &str = "STOREFRONT_NOTIFICATIONS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Format of the final product listing on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `ID: <id> Name: <name> Price: <price>` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format `{other}` (expected `text` or `json`)")),
        }
    }
}

/// Where service and unit-of-work notifications are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationTarget {
    /// Printed on stdout next to the listing.
    #[default]
    Console,
    /// Emitted as `tracing` events (stderr).
    Log,
}

impl FromStr for NotificationTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "log" => Ok(Self::Log),
            other => Err(format!("unknown notification target `{other}` (expected `console` or `log`)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Prices strictly above this trigger a service warning.
    pub price_threshold: i64,
    pub output: OutputFormat,
    pub notifications: NotificationTarget,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            price_threshold: DEFAULT_PRICE_THRESHOLD,
            output: OutputFormat::default(),
            notifications: NotificationTarget::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PRICE_THRESHOLD) {
            config.price_threshold = parse(ENV_PRICE_THRESHOLD, &raw, |s| {
                s.trim().parse::<i64>().map_err(|e| e.to_string())
            })?;
        }
        if let Some(raw) = lookup(ENV_OUTPUT) {
            config.output = parse(ENV_OUTPUT, &raw, OutputFormat::from_str)?;
        }
        if let Some(raw) = lookup(ENV_NOTIFICATIONS) {
            config.notifications = parse(ENV_NOTIFICATIONS, &raw, NotificationTarget::from_str)?;
        }

        Ok(config)
    }
}

/// Parse `raw` with `f`, attributing failures to `key`.
pub fn parse<T>(
    key: &'static str,
    raw: &str,
    f: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    f(raw).map_err(|reason| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason,
    })
}
