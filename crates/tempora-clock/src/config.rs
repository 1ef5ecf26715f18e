//! Configuration for clocks and time sources

use crate::source::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::{ClockError, ConfiguredSource, FixedSource, RestSource, SystemSource, ZonedClock};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which clock and time source to use
///
/// # Examples
///
/// ```
/// use tempora_clock::{ClockConfig, SourceConfig};
///
/// let config = ClockConfig::from_toml(r#"
///     timezone = "America/New_York"
///
///     [source]
///     kind = "rest"
///     url = "http://time.internal/now"
///     max_retries = 3
/// "#).unwrap();
///
/// assert_eq!(config.timezone, "America/New_York");
/// assert!(matches!(config.source, SourceConfig::Rest { timeout_secs: 5, max_retries: 3, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// IANA timezone name
    /// Default: Europe/Warsaw
    pub timezone: String,

    /// Where the current instant comes from
    /// Default: the system clock
    pub source: SourceConfig,
}

/// Time source selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    /// Operating system clock
    #[default]
    System,

    /// Frozen instant, for demos and tests
    Fixed {
        /// RFC 3339 timestamp
        at: String,
    },

    /// Remote HTTP time service
    Rest {
        /// Endpoint answering `{"Time": "<RFC 3339>"}`
        url: String,

        /// Per-attempt timeout in seconds
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,

        /// Total attempts before giving up
        #[serde(default = "default_max_retries")]
        max_retries: u32,
    },
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: "Europe/Warsaw".to_string(),
            source: SourceConfig::default(),
        }
    }
}

impl ClockConfig {
    /// Check the configuration without building anything
    pub fn validate(&self) -> Result<(), ClockError> {
        ZonedClock::from_name(&self.timezone)?;

        match &self.source {
            SourceConfig::System => {}
            SourceConfig::Fixed { at } => {
                parse_fixed(at)?;
            }
            SourceConfig::Rest {
                url,
                timeout_secs,
                max_retries,
            } => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ClockError::Config(format!(
                        "source.url must be an http(s) URL, got {url:?}"
                    )));
                }
                if *timeout_secs == 0 {
                    return Err(ClockError::Config(
                        "source.timeout_secs must be positive".to_string(),
                    ));
                }
                if *max_retries == 0 {
                    return Err(ClockError::Config(
                        "source.max_retries must be at least 1".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Parse and validate TOML
    pub fn from_toml(text: &str) -> Result<Self, ClockError> {
        let config: Self = toml::from_str(text)
            .map_err(|e| ClockError::Config(format!("Failed to parse clock config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ClockError> {
        toml::to_string_pretty(self)
            .map_err(|e| ClockError::Config(format!("Failed to serialize clock config: {e}")))
    }

    /// Clock for the configured timezone
    pub fn build_clock(&self) -> Result<ZonedClock, ClockError> {
        ZonedClock::from_name(&self.timezone)
    }

    /// Time source described by the configuration
    pub fn build_source(&self) -> Result<ConfiguredSource, ClockError> {
        self.validate()?;
        let source = match &self.source {
            SourceConfig::System => ConfiguredSource::System(SystemSource),
            SourceConfig::Fixed { at } => ConfiguredSource::Fixed(FixedSource::new(parse_fixed(at)?)),
            SourceConfig::Rest {
                url,
                timeout_secs,
                max_retries,
            } => ConfiguredSource::Rest(
                RestSource::new(url.clone())?
                    .with_timeout(Duration::from_secs(*timeout_secs))?
                    .with_max_retries(*max_retries),
            ),
        };
        tracing::debug!(timezone = %self.timezone, source = ?self.source, "built time source");
        Ok(source)
    }
}

fn parse_fixed(at: &str) -> Result<DateTime<Utc>, ClockError> {
    DateTime::parse_from_rfc3339(at)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| ClockError::Config(format!("source.at must be RFC 3339, got {at:?}: {e}")))
}
