//! Calendar date without a time of day or timezone

use crate::text::impl_text_serde;
use crate::{LocalDateTime, LocalTime, TemporalError, Weekday};
use chrono::{Datelike, NaiveDate, TimeDelta};
use std::fmt;
use std::str::FromStr;

/// A proleptic Gregorian date
///
/// Ordered by calendar position. An absent date is `Option<LocalDate>`.
///
/// # Examples
///
/// ```
/// use tempora_domain::LocalDate;
///
/// let d = LocalDate::new(2000, 2, 28).unwrap();
/// assert_eq!(d.next().to_string(), "2000-02-29");
/// assert_eq!(d.end(), d.next().start());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDate(NaiveDate);

impl LocalDate {
    /// Create a date from its components
    ///
    /// Out-of-range components are rejected rather than normalized: the
    /// error names the first component that is invalid.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TemporalError> {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Ok(Self(date));
        }
        let (field, value) = if !(1..=12).contains(&month) {
            ("month", i64::from(month))
        } else if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            ("year", i64::from(year))
        } else {
            ("day", i64::from(day))
        };
        Err(TemporalError::InvalidComponent { field, value })
    }

    /// Like [`LocalDate::new`] but panics on invalid components
    #[track_caller]
    pub fn must_new(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Parse `YYYY-MM-DD`, panicking on malformed input
    #[track_caller]
    pub fn must_parse(text: &str) -> Self {
        text.parse().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Wrap a chrono date
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying chrono date
    pub const fn to_naive(self) -> NaiveDate {
        self.0
    }

    /// Calendar year
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month, `1..=12`
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of month, `1..=31`
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Day of the week
    pub fn weekday(self) -> Weekday {
        self.0.weekday().into()
    }

    /// The following calendar day, or `None` past the last representable date
    pub fn checked_next(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// The following calendar day
    ///
    /// # Panics
    ///
    /// Panics if `self` is the last date chrono can represent.
    pub fn next(self) -> Self {
        self.checked_next()
            .unwrap_or_else(|| panic!("no calendar day after {self}"))
    }

    /// Shift by a signed number of days
    pub fn add_days(self, days: i64) -> Option<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }

    /// Combine with a time of day
    pub fn with_time(self, time: LocalTime) -> LocalDateTime {
        LocalDateTime::new(self, time)
    }

    /// 00:00 on this date
    pub fn start(self) -> LocalDateTime {
        self.with_time(LocalTime::MIDNIGHT)
    }

    /// Exclusive end of this date: 00:00 on the following day
    ///
    /// # Panics
    ///
    /// Panics on the last date chrono can represent; see
    /// [`LocalDate::checked_end`].
    pub fn end(self) -> LocalDateTime {
        self.next().start()
    }

    /// Exclusive end of this date, or `None` when the following day cannot
    /// be represented
    pub fn checked_end(self) -> Option<LocalDateTime> {
        self.checked_next().map(Self::start)
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // chrono prefixes years past 9999 with '+'; the wire format does not
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for LocalDate {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| TemporalError::parse("date", s, e))
    }
}

impl From<NaiveDate> for LocalDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<LocalDate> for NaiveDate {
    fn from(date: LocalDate) -> Self {
        date.0
    }
}

impl_text_serde!(LocalDate);
