//! Seconds since the Unix epoch

use chrono::{DateTime, Utc};
use std::fmt;

/// Number of seconds elapsed since 1970-01-01T00:00:00Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    /// Wrap a raw second count
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Raw second count
    pub const fn as_secs(self) -> i64 {
        self.0
    }

    /// Seconds from `instant` until this timestamp (negative if already past)
    pub fn seconds_to(self, instant: DateTime<Utc>) -> i64 {
        self.0 - instant.timestamp()
    }
}

impl From<DateTime<Utc>> for UnixTimestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant.timestamp())
    }
}

impl fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
