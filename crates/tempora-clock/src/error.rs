//! Error types for clocks and time sources

use std::time::Duration;
use tempora_domain::LocalDateTime;
use thiserror::Error;

/// Errors that can occur while obtaining or converting the current time
#[derive(Error, Debug)]
pub enum ClockError {
    /// Network or transport failure talking to a remote source
    #[error("Communication error: {0}")]
    Communication(String),

    /// The remote source answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The remote source did not answer in time
    #[error("Time source timed out after {0:?}")]
    Timeout(Duration),

    /// The remote source answered with a body we could not read
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The configured timezone is not a known IANA name
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// The local date-time falls in a daylight-saving gap
    #[error("Local time {0} does not exist in the clock's timezone")]
    NonexistentLocalTime(LocalDateTime),

    /// Invalid clock configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClockError {
    /// Whether another attempt could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ClockError::Communication(_) | ClockError::Timeout(_) => true,
            ClockError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
