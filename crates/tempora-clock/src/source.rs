//! Time sources
//!
//! A [`TimeSource`] answers "what instant is it now". The system source reads
//! the local clock, the fixed source always answers the same instant and the
//! REST source asks a remote service, which lets a whole deployment share one
//! notion of the current time.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempora_clock::{FixedSource, TimeSource};
//!
//! let instant = Utc.with_ymd_and_hms(2018, 1, 2, 15, 4, 5).unwrap();
//! let source = FixedSource::new(instant);
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! assert_eq!(runtime.block_on(source.now()).unwrap(), instant);
//! ```

use crate::ClockError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

/// Default timeout for one remote request (5 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default number of attempts against a remote source
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Default delay before the first retry
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// Something that knows the current instant
#[async_trait]
pub trait TimeSource: Send + Sync {
    /// The current instant
    async fn now(&self) -> Result<DateTime<Utc>, ClockError>;
}

/// Reads the operating system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource;

#[async_trait]
impl TimeSource for SystemSource {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(Utc::now())
    }
}

/// Always answers the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSource {
    instant: DateTime<Utc>,
}

impl FixedSource {
    /// Create a source frozen at `instant`
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

#[async_trait]
impl TimeSource for FixedSource {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(self.instant)
    }
}

/// Response body of a remote time service
#[derive(Deserialize)]
struct TimeResponse {
    #[serde(rename = "Time", alias = "time")]
    time: String,
}

/// Asks a remote HTTP service for the current time
///
/// The service answers `GET <url>` with `{"Time": "<RFC 3339 timestamp>"}`.
/// Transport failures, timeouts and 5xx answers are retried with
/// exponential backoff up to `max_retries` attempts in total; other failures
/// are returned immediately.
#[derive(Debug, Clone)]
pub struct RestSource {
    url: String,
    client: reqwest::Client,
    timeout: Duration,
    max_retries: u32,
    backoff: Duration,
}

impl RestSource {
    /// Create a source for `url` with default settings
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Communication`] if the HTTP client cannot be
    /// built.
    pub fn new(url: impl Into<String>) -> Result<Self, ClockError> {
        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        Ok(Self {
            url: url.into(),
            client: build_client(timeout)?,
            timeout,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: DEFAULT_BACKOFF,
        })
    }

    /// Set the per-attempt timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ClockError> {
        self.client = build_client(timeout)?;
        self.timeout = timeout;
        Ok(self)
    }

    /// Set the total number of attempts (at least one)
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Set the delay before the first retry; later retries double it
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Endpoint this source queries
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Like [`TimeSource::now`] but bounded by a caller-supplied timeout
    /// for each attempt instead of the configured one
    pub async fn now_within(&self, timeout: Duration) -> Result<DateTime<Utc>, ClockError> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let result = match tokio::time::timeout(timeout, self.fetch(timeout)).await {
                Ok(result) => result,
                Err(_) => Err(ClockError::Timeout(timeout)),
            };

            match result {
                Ok(instant) => {
                    tracing::debug!(url = %self.url, %instant, attempts, "fetched remote time");
                    return Ok(instant);
                }
                Err(e) if e.is_transient() && attempts < self.max_retries => {
                    // Exponential backoff: 1x, 2x, 4x, ...
                    let delay = self.backoff * 2u32.saturating_pow(attempts - 1);
                    tracing::warn!(url = %self.url, error = %e, attempts, ?delay, "retrying time source");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    tracing::warn!(url = %self.url, error = %e, attempts, "time source failed");
                    return Err(e);
                }
            }
        }
    }

    async fn fetch(&self, timeout: Duration) -> Result<DateTime<Utc>, ClockError> {
        tracing::debug!(url = %self.url, ?timeout, "requesting remote time");
        let response = self
            .client
            .get(&self.url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| request_error(e, timeout, "Request failed"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| request_error(e, timeout, "Failed to read body"))?;
        if !status.is_success() {
            return Err(ClockError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_time_response(&body)
    }
}

#[async_trait]
impl TimeSource for RestSource {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        self.now_within(self.timeout).await
    }
}

/// Connecting is bounded by the configured timeout; whole requests are
/// bounded per call in [`RestSource::now_within`].
fn build_client(timeout: Duration) -> Result<reqwest::Client, ClockError> {
    reqwest::Client::builder()
        .connect_timeout(timeout)
        .build()
        .map_err(|e| ClockError::Communication(format!("Failed to build HTTP client: {e}")))
}

fn request_error(e: reqwest::Error, timeout: Duration, context: &str) -> ClockError {
    if e.is_timeout() {
        ClockError::Timeout(timeout)
    } else {
        ClockError::Communication(format!("{context}: {e}"))
    }
}

fn parse_time_response(body: &str) -> Result<DateTime<Utc>, ClockError> {
    let response: TimeResponse = serde_json::from_str(body)
        .map_err(|e| ClockError::InvalidResponse(format!("Failed to parse response: {e}")))?;
    DateTime::parse_from_rfc3339(&response.time)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| ClockError::InvalidResponse(format!("Invalid timestamp {:?}: {e}", response.time)))
}

/// A source chosen at runtime from configuration
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    /// Operating system clock
    System(SystemSource),
    /// Frozen instant
    Fixed(FixedSource),
    /// Remote HTTP service
    Rest(RestSource),
}

#[async_trait]
impl TimeSource for ConfiguredSource {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        match self {
            ConfiguredSource::System(source) => source.now().await,
            ConfiguredSource::Fixed(source) => source.now().await,
            ConfiguredSource::Rest(source) => source.now().await,
        }
    }
}
