//! Clocks turn an instant into civil time
//!
//! A [`Clock`] knows a timezone. Given a [`TimeContext`] it answers today's
//! date, the current local date-time and the wall-clock time; it also maps a
//! local date-time back to a Unix timestamp.

use crate::{ClockError, TimeContext};
use chrono::TimeZone;
use chrono_tz::Tz;
use tempora_domain::{LocalDate, LocalDateTime, LocalTime, UnixTimestamp};

/// Timezone used when none is configured
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Warsaw;

/// Civil-time view of the current instant
pub trait Clock: Send + Sync {
    /// Local date of the context's instant
    fn today(&self, ctx: &TimeContext) -> LocalDate {
        self.now(ctx).date()
    }

    /// Local date-time of the context's instant
    fn now(&self, ctx: &TimeContext) -> LocalDateTime;

    /// Local time of day of the context's instant
    fn wall_time(&self, ctx: &TimeContext) -> LocalTime {
        self.now(ctx).time()
    }

    /// Seconds since the epoch for a local date-time
    fn to_unix_timestamp(&self, date_time: LocalDateTime) -> Result<UnixTimestamp, ClockError>;
}

/// A clock for one IANA timezone
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempora_clock::{Clock, TimeContext, ZonedClock};
///
/// let clock = ZonedClock::from_name("Europe/Warsaw").unwrap();
/// let ctx = TimeContext::at(Utc.with_ymd_and_hms(2018, 1, 2, 23, 30, 0).unwrap());
///
/// // Warsaw is one hour ahead of UTC in winter
/// assert_eq!(clock.now(&ctx).to_string(), "2018-01-03 00:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedClock {
    zone: Tz,
}

impl ZonedClock {
    /// Create a clock for `zone`
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Create a clock from an IANA name such as `Europe/Warsaw`
    pub fn from_name(name: &str) -> Result<Self, ClockError> {
        let zone = name
            .parse::<Tz>()
            .map_err(|_| ClockError::UnknownTimezone(name.to_string()))?;
        Ok(Self::new(zone))
    }

    /// The clock's timezone
    pub fn zone(&self) -> Tz {
        self.zone
    }
}

impl Default for ZonedClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl Clock for ZonedClock {
    fn now(&self, ctx: &TimeContext) -> LocalDateTime {
        LocalDateTime::from_naive(ctx.instant().with_timezone(&self.zone).naive_local())
    }

    /// Ambiguous local times (the repeated hour when clocks go back) resolve
    /// to the earlier instant; times skipped when clocks go forward fail with
    /// [`ClockError::NonexistentLocalTime`].
    fn to_unix_timestamp(&self, date_time: LocalDateTime) -> Result<UnixTimestamp, ClockError> {
        self.zone
            .from_local_datetime(&date_time.to_naive())
            .earliest()
            .map(|instant| UnixTimestamp::from_secs(instant.timestamp()))
            .ok_or(ClockError::NonexistentLocalTime(date_time))
    }
}

/// A clock frozen at one local date-time, for tests
///
/// Ignores the context entirely and treats local time as UTC when
/// converting to a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubClock {
    now: LocalDateTime,
}

impl StubClock {
    /// Create a clock that always reports `now`
    pub fn new(now: LocalDateTime) -> Self {
        Self { now }
    }
}

impl Clock for StubClock {
    fn now(&self, _ctx: &TimeContext) -> LocalDateTime {
        self.now
    }

    fn to_unix_timestamp(&self, date_time: LocalDateTime) -> Result<UnixTimestamp, ClockError> {
        Ok(UnixTimestamp::from(date_time.to_naive().and_utc()))
    }
}
