//! Time of day without a date or timezone

use crate::text::impl_text_serde;
use crate::TemporalError;
use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Minutes in a nominal day
pub(crate) const MINUTES_PER_DAY: u32 = 24 * 60;

/// An hour/minute pair, ordered by (hour, minute)
///
/// An absent time is modelled as `Option<LocalTime>`; every `LocalTime`
/// value is a real clock reading.
///
/// # Examples
///
/// ```
/// use tempora_domain::LocalTime;
///
/// let t: LocalTime = "09:05".parse().unwrap();
/// assert_eq!((t.hour(), t.minute()), (9, 5));
/// assert_eq!(t.to_string(), "09:05");
/// assert!(LocalTime::MIDNIGHT < t);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
    hour: u8,
    minute: u8,
}

impl LocalTime {
    /// 00:00, the start of a day
    pub const MIDNIGHT: LocalTime = LocalTime { hour: 0, minute: 0 };

    /// Create a time of day
    ///
    /// Fails with [`TemporalError::InvalidComponent`] when `hour` is not in
    /// `0..24` or `minute` is not in `0..60`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TemporalError> {
        if hour >= 24 {
            return Err(TemporalError::InvalidComponent {
                field: "hour",
                value: i64::from(hour),
            });
        }
        if minute >= 60 {
            return Err(TemporalError::InvalidComponent {
                field: "minute",
                value: i64::from(minute),
            });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Like [`LocalTime::new`] but panics on invalid components
    #[track_caller]
    pub fn must_new(hour: u32, minute: u32) -> Self {
        Self::new(hour, minute).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Parse `HH:MM`, panicking on malformed input
    #[track_caller]
    pub fn must_parse(text: &str) -> Self {
        text.parse().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Truncate a chrono time to minute precision
    pub fn from_naive(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    /// The equivalent chrono time (seconds are zero)
    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour.into(), self.minute.into(), 0)
            .expect("hour and minute are validated on construction")
    }

    /// Hour component, `0..24`
    pub fn hour(self) -> u32 {
        self.hour.into()
    }

    /// Minute component, `0..60`
    pub fn minute(self) -> u32 {
        self.minute.into()
    }

    /// Minutes elapsed since 00:00
    pub fn minute_of_day(self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Parse SQL time text, `HH:MM` or `HH:MM:SS[.f]`
    ///
    /// Seconds are accepted and dropped.
    pub fn parse_sql_text(text: &str) -> Result<Self, TemporalError> {
        ["%H:%M:%S%.f", "%H:%M"]
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(text, format).ok())
            .map(Self::from_naive)
            .ok_or_else(|| TemporalError::parse("time", text, "expected HH:MM[:SS[.f]]"))
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for LocalTime {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Self::from_naive)
            .map_err(|e| TemporalError::parse("time", s, e))
    }
}

impl From<NaiveTime> for LocalTime {
    fn from(time: NaiveTime) -> Self {
        Self::from_naive(time)
    }
}

impl From<LocalTime> for NaiveTime {
    fn from(time: LocalTime) -> Self {
        time.to_naive()
    }
}

impl_text_serde!(LocalTime);
