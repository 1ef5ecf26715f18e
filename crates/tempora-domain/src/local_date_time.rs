//! Date combined with a time of day, without a timezone

use crate::text::impl_text_serde;
use crate::{LocalDate, LocalTime, TemporalError, Weekday};
use chrono::{Datelike, NaiveDateTime, TimeDelta};
use std::fmt;
use std::str::FromStr;

/// Formats accepted when reading a date-time back from a SQL text column
const SQL_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A civil date-time with sub-second precision
///
/// Text form is `YYYY-MM-DD HH:MM`; seconds are kept internally and in the
/// SQL text form but dropped when rendering. An absent date-time is
/// `Option<LocalDateTime>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime(NaiveDateTime);

impl LocalDateTime {
    /// Combine a date and a time of day
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self(date.to_naive().and_time(time.to_naive()))
    }

    /// Wrap a chrono date-time
    pub const fn from_naive(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }

    /// The underlying chrono date-time
    pub const fn to_naive(self) -> NaiveDateTime {
        self.0
    }

    /// Parse `YYYY-MM-DD HH:MM`, panicking on malformed input
    #[track_caller]
    pub fn must_parse(text: &str) -> Self {
        text.parse().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Calendar date component
    pub fn date(self) -> LocalDate {
        LocalDate::from_naive(self.0.date())
    }

    /// Time of day component, truncated to minutes
    pub fn time(self) -> LocalTime {
        LocalTime::from_naive(self.0.time())
    }

    /// Day of the week
    pub fn weekday(self) -> Weekday {
        self.0.weekday().into()
    }

    /// Add a signed duration, `None` on overflow
    pub fn checked_add(self, delta: TimeDelta) -> Option<Self> {
        self.0.checked_add_signed(delta).map(Self)
    }

    /// `self - earlier` as a signed duration
    pub fn duration_since(self, earlier: LocalDateTime) -> TimeDelta {
        self.0.signed_duration_since(earlier.0)
    }

    /// The earlier of two date-times
    pub fn earlier(self, other: LocalDateTime) -> Self {
        self.min(other)
    }

    /// Render for a SQL text column: `YYYY-MM-DD HH:MM:SS[.fraction]`
    pub fn to_sql_text(self) -> String {
        format!("{} {}", self.date(), self.0.format("%H:%M:%S%.f"))
    }

    /// Parse SQL date-time text
    ///
    /// Accepts a space or `T` separator, optional seconds and an optional
    /// fraction, which covers what SQLite's date functions produce.
    pub fn parse_sql_text(text: &str) -> Result<Self, TemporalError> {
        SQL_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(Self)
            .ok_or_else(|| {
                TemporalError::parse("date-time", text, "expected YYYY-MM-DD HH:MM[:SS[.f]]")
            })
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date(), self.time())
    }
}

impl FromStr for LocalDateTime {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
            .map(Self)
            .map_err(|e| TemporalError::parse("date-time", s, e))
    }
}

impl From<NaiveDateTime> for LocalDateTime {
    fn from(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }
}

impl From<LocalDateTime> for NaiveDateTime {
    fn from(date_time: LocalDateTime) -> Self {
        date_time.0
    }
}

impl From<LocalDate> for LocalDateTime {
    fn from(date: LocalDate) -> Self {
        date.start()
    }
}

impl_text_serde!(LocalDateTime);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_parse_and_display() {
        let dt = LocalDateTime::must_parse("2017-01-04 09:30");
        assert_eq!(dt.date(), LocalDate::must_new(2017, 1, 4));
        assert_eq!(dt.time(), LocalTime::must_new(9, 30));
        assert_eq!(dt.to_string(), "2017-01-04 09:30");
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        assert!("2017-01-04T09:30".parse::<LocalDateTime>().is_err());
        assert!("2017-01-04".parse::<LocalDateTime>().is_err());
        assert!("2017-01-04 25:00".parse::<LocalDateTime>().is_err());
    }

    #[test]
    fn test_ordering() {
        let a = LocalDateTime::must_parse("2017-01-04 09:30");
        let b = LocalDateTime::must_parse("2017-01-04 09:31");
        assert!(a < b);
        assert_eq!(a.earlier(b), a);
        assert_eq!(b.earlier(a), a);
    }

    #[test]
    fn test_duration_since() {
        let a = LocalDateTime::must_parse("2017-01-04 09:00");
        let b = LocalDateTime::must_parse("2017-01-05 10:30");
        assert_eq!(b.duration_since(a), TimeDelta::minutes(25 * 60 + 30));
        assert_eq!(a.duration_since(b), -TimeDelta::minutes(25 * 60 + 30));
    }

    #[test]
    fn test_checked_add_crosses_midnight() {
        let dt = LocalDateTime::must_parse("2017-01-04 23:30");
        let later = dt.checked_add(TimeDelta::hours(1)).unwrap();
        assert_eq!(later.to_string(), "2017-01-05 00:30");
    }

    #[test]
    fn test_sql_text_keeps_seconds() {
        let naive = NaiveDate::from_ymd_opt(2018, 1, 2)
            .unwrap()
            .and_time(NaiveTime::from_hms_milli_opt(15, 4, 5, 250).unwrap());
        let dt = LocalDateTime::from_naive(naive);

        assert_eq!(dt.to_sql_text(), "2018-01-02 15:04:05.250");
        assert_eq!(dt.to_string(), "2018-01-02 15:04");
        assert_eq!(LocalDateTime::parse_sql_text(&dt.to_sql_text()).unwrap(), dt);
    }

    #[test]
    fn test_parse_sql_text_variants() {
        let expected = LocalDateTime::must_parse("2018-01-02 15:04");
        assert_eq!(LocalDateTime::parse_sql_text("2018-01-02 15:04").unwrap(), expected);
        assert_eq!(LocalDateTime::parse_sql_text("2018-01-02T15:04:00").unwrap(), expected);
        assert!(LocalDateTime::parse_sql_text("yesterday").is_err());
    }

    #[test]
    fn test_json() {
        let dt = LocalDateTime::must_parse("2001-10-01 10:30");
        assert_eq!(serde_json::to_string(&dt).unwrap(), r#""2001-10-01 10:30""#);
        let parsed: LocalDateTime = serde_json::from_str(r#""2001-10-01 10:30""#).unwrap();
        assert_eq!(parsed, dt);
    }
}
