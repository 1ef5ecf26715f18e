//! LocalTimeSpan module - recurring daily windows
//!
//! A window such as `09:00-17:00` applies to every day. An end of `00:00`
//! means the window runs to the end of the day, so `22:00-00:00` covers the
//! last two hours of a day rather than being rejected as inverted. Windows
//! that wrap past midnight (`22:00-02:00`) cannot be expressed.

use crate::local_time::MINUTES_PER_DAY;
use crate::text::impl_text_serde;
use crate::{DateTimeSpan, LocalDate, LocalTime, TemporalError};
use chrono::TimeDelta;
use std::fmt;
use std::str::FromStr;

/// Where a daily window ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanEnd {
    /// Ends at a time of day on the same day
    At(LocalTime),
    /// Ends at the following midnight
    EndOfDay,
}

impl SpanEnd {
    /// Minute of day, with `EndOfDay` as 1440
    fn minute_of_day(self) -> u32 {
        match self {
            SpanEnd::At(time) => time.minute_of_day(),
            SpanEnd::EndOfDay => MINUTES_PER_DAY,
        }
    }
}

/// A time-of-day window repeated on every day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalTimeSpan {
    from: LocalTime,
    end: SpanEnd,
}

impl LocalTimeSpan {
    /// Create a window from `from` to `to`
    ///
    /// A `to` of `00:00` is read as end of day. Any other `to` earlier than
    /// `from` fails with [`TemporalError::FromAfterTo`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora_domain::{LocalTime, LocalTimeSpan, SpanEnd};
    ///
    /// let late = LocalTimeSpan::new(LocalTime::must_new(22, 0), LocalTime::MIDNIGHT).unwrap();
    /// assert_eq!(late.end(), SpanEnd::EndOfDay);
    ///
    /// assert!(LocalTimeSpan::new(LocalTime::must_new(11, 0), LocalTime::must_new(10, 0)).is_err());
    /// ```
    pub fn new(from: LocalTime, to: LocalTime) -> Result<Self, TemporalError> {
        if to == LocalTime::MIDNIGHT {
            return Ok(Self::until_end_of_day(from));
        }
        if from > to {
            return Err(TemporalError::from_after_to(from, to));
        }
        Ok(Self {
            from,
            end: SpanEnd::At(to),
        })
    }

    /// A window from `from` to the end of the day
    pub fn until_end_of_day(from: LocalTime) -> Self {
        Self {
            from,
            end: SpanEnd::EndOfDay,
        }
    }

    /// Like [`LocalTimeSpan::new`] but panics on an inverted window
    #[track_caller]
    pub fn must_new(from: LocalTime, to: LocalTime) -> Self {
        Self::new(from, to).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Parse `HH:MM-HH:MM`, panicking on malformed input
    #[track_caller]
    pub fn must_parse(text: &str) -> Self {
        text.parse().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Start of the window
    pub fn from(&self) -> LocalTime {
        self.from
    }

    /// End of the window as a time of day, `00:00` for end of day
    pub fn to(&self) -> LocalTime {
        match self.end {
            SpanEnd::At(time) => time,
            SpanEnd::EndOfDay => LocalTime::MIDNIGHT,
        }
    }

    /// End of the window
    pub fn end(&self) -> SpanEnd {
        self.end
    }

    /// Length of the window
    pub fn duration(&self) -> TimeDelta {
        let minutes = self.end.minute_of_day() - self.from.minute_of_day();
        TimeDelta::minutes(i64::from(minutes))
    }

    /// Whether the window has a positive length
    pub fn is_valid(&self) -> bool {
        self.duration() > TimeDelta::zero()
    }

    /// The concrete span this window covers on `date`
    ///
    /// An end-of-day window on the last representable date projects to an
    /// open span.
    pub fn project_onto(&self, date: LocalDate) -> DateTimeSpan {
        let to = match self.end {
            SpanEnd::At(time) => Some(date.with_time(time)),
            SpanEnd::EndOfDay => date.checked_end(),
        };
        DateTimeSpan::spanning(date.with_time(self.from), to)
    }

    /// Whether the window, on the day `span` starts, overlaps `span`
    ///
    /// An end-of-day window starting before the time of day at which `span`
    /// ends is reported as overlapping without projection; an open `span`
    /// always satisfies that check.
    pub fn overlaps_date_time_span(&self, span: &DateTimeSpan) -> bool {
        if self.end == SpanEnd::EndOfDay && span.to().is_none_or(|to| self.from < to.time()) {
            return true;
        }
        self.project_onto(span.from().date()).overlaps(span)
    }

    /// Whether the window, on the day `span` starts, contains `span`
    pub fn contains_date_time_span(&self, span: &DateTimeSpan) -> bool {
        self.project_onto(span.from().date()).contains(span)
    }

    /// Whether two windows share a minute of the same day
    ///
    /// `EndOfDay` counts as minute 1440, so `10:00-00:00` overlaps
    /// `08:00-12:00`; windows ending at midnight are not excluded.
    pub fn overlaps(&self, other: &LocalTimeSpan) -> bool {
        self.from.minute_of_day() < other.end.minute_of_day()
            && other.from.minute_of_day() < self.end.minute_of_day()
    }
}

impl fmt::Display for LocalTimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to())
    }
}

impl FromStr for LocalTimeSpan {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once('-')
            .ok_or_else(|| TemporalError::parse("time span", s, "expected HH:MM-HH:MM"))?;
        Self::new(from.trim().parse()?, to.trim().parse()?)
    }
}

impl_text_serde!(LocalTimeSpan);
