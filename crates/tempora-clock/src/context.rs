//! Request-scoped current time

use crate::{ClockError, TimeSource};
use chrono::{DateTime, Utc};

/// An instant captured once and shared by everything handling one request
///
/// Capturing up front means every clock reading made while serving the
/// request agrees, even if the request spans a second or a midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeContext {
    instant: DateTime<Utc>,
}

impl TimeContext {
    /// Ask `source` for the current instant
    pub async fn capture<S>(source: &S) -> Result<Self, ClockError>
    where
        S: TimeSource + ?Sized,
    {
        let instant = source.now().await?;
        tracing::debug!(%instant, "captured time context");
        Ok(Self { instant })
    }

    /// A context pinned to `instant`
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// The captured instant
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}
