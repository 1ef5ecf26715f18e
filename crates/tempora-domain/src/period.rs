//! Period module - inclusive ranges of calendar dates

use crate::error::Bound;
use crate::{DateTimeSpan, LocalDate, TemporalError};
use std::fmt;
use std::iter::FusedIterator;

/// A set of days between `from` and `to`, both inclusive
///
/// A period without an upper bound is open: it runs indefinitely.
///
/// # Examples
///
/// ```
/// use tempora_domain::{LocalDate, Period};
///
/// let period = Period::new(
///     LocalDate::must_new(2010, 11, 12),
///     LocalDate::must_new(2011, 12, 13),
/// ).unwrap();
/// assert_eq!(period.to_string(), "[2010-11-12 - 2011-12-13]");
///
/// let open = Period::open_from(LocalDate::must_new(2010, 11, 12)).unwrap();
/// assert_eq!(open.to_string(), "[2010-11-12 - indefinitely]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    from: LocalDate,
    to: Option<LocalDate>,
}

impl Period {
    /// Create a closed period
    ///
    /// Either bound may be passed as `Option<LocalDate>`; an absent bound
    /// fails with [`TemporalError::InvalidNull`]. Fails with
    /// [`TemporalError::FromAfterTo`] if `from > to`.
    pub fn new(
        from: impl Into<Option<LocalDate>>,
        to: impl Into<Option<LocalDate>>,
    ) -> Result<Self, TemporalError> {
        let from = from.into().ok_or(TemporalError::InvalidNull { bound: Bound::From })?;
        let to = to.into().ok_or(TemporalError::InvalidNull { bound: Bound::To })?;
        if from > to {
            return Err(TemporalError::from_after_to(from, to));
        }
        Ok(Self { from, to: Some(to) })
    }

    /// A period covering a single day
    pub fn one_day(date: impl Into<Option<LocalDate>>) -> Result<Self, TemporalError> {
        let date = date.into();
        Self::new(date, date)
    }

    /// Create a period running from `from` indefinitely
    pub fn open_from(from: impl Into<Option<LocalDate>>) -> Result<Self, TemporalError> {
        let from = from.into().ok_or(TemporalError::InvalidNull { bound: Bound::From })?;
        Ok(Self { from, to: None })
    }

    /// Like [`Period::new`] but panics on invalid bounds
    #[track_caller]
    pub fn must_new(from: LocalDate, to: LocalDate) -> Self {
        Self::new(from, to).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Like [`Period::one_day`] but infallible for a present date
    pub fn must_one_day(date: LocalDate) -> Self {
        Self {
            from: date,
            to: Some(date),
        }
    }

    /// Like [`Period::open_from`] but infallible for a present date
    pub fn must_open_from(from: LocalDate) -> Self {
        Self { from, to: None }
    }

    /// First day of the period
    pub fn from(&self) -> LocalDate {
        self.from
    }

    /// Last day of the period, `None` if open
    pub fn to(&self) -> Option<LocalDate> {
        self.to
    }

    /// Whether the period has no upper bound
    pub fn is_open(&self) -> bool {
        self.to.is_none()
    }

    /// Whether `date` falls within the period
    pub fn contains(&self, date: LocalDate) -> bool {
        self.from <= date && self.to.is_none_or(|to| date <= to)
    }

    /// Every day of the period in ascending order
    ///
    /// The returned iterator is lazy and can be cloned to restart it. Open
    /// periods have no last day, so this fails with
    /// [`TemporalError::PreconditionViolation`] instead of iterating forever.
    pub fn days(&self) -> Result<Days, TemporalError> {
        let last = self.to.ok_or_else(|| {
            TemporalError::PreconditionViolation(format!("cannot enumerate days of open period {self}"))
        })?;
        Ok(Days {
            next: Some(self.from),
            last,
        })
    }

    /// The instants covered by this period
    ///
    /// `[from 00:00, day after to 00:00)`, or open-ended from `from 00:00`.
    /// A period ending on the last representable date has no representable
    /// end instant and yields an open span, which covers the same instants.
    pub fn to_date_time_span(&self) -> DateTimeSpan {
        DateTimeSpan::spanning(self.from.start(), self.to.and_then(LocalDate::checked_end))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "[{} - {}]", self.from, to),
            None => write!(f, "[{} - indefinitely]", self.from),
        }
    }
}

/// Iterator over the days of a bounded [`Period`]
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<LocalDate>,
    last: LocalDate,
}

impl Iterator for Days {
    type Item = LocalDate;

    fn next(&mut self) -> Option<LocalDate> {
        let current = self.next.filter(|day| *day <= self.last)?;
        self.next = current.checked_next();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) if next <= self.last => {
                let days = self.last.to_naive().signed_duration_since(next.to_naive()).num_days();
                usize::try_from(days + 1).unwrap_or(usize::MAX)
            }
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl FusedIterator for Days {}
