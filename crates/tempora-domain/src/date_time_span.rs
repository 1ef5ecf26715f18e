//! DateTimeSpan module - half-open ranges of date-times
//!
//! A span covers every instant `t` with `from <= t < to`. Without an upper
//! bound it covers every instant from `from` on; in comparisons the missing
//! end behaves as a point infinitely far in the future.

use crate::error::Bound;
use crate::{LocalDateTime, LocalTime, LocalTimeSpan, TemporalError};
use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A half-open span of date-times, optionally unbounded above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeSpan {
    from: LocalDateTime,
    to: Option<LocalDateTime>,
}

/// Compare two upper bounds where `None` is +infinity
fn cmp_ends(a: Option<LocalDateTime>, b: Option<LocalDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Whether `instant` lies strictly before the upper bound `end`
fn before_end(instant: LocalDateTime, end: Option<LocalDateTime>) -> bool {
    end.is_none_or(|end| instant < end)
}

impl DateTimeSpan {
    /// Create a bounded span
    ///
    /// Fails with [`TemporalError::InvalidNull`] for an absent bound and with
    /// [`TemporalError::FromAfterTo`] if `from > to`. `from == to` yields an
    /// empty span.
    pub fn new(
        from: impl Into<Option<LocalDateTime>>,
        to: impl Into<Option<LocalDateTime>>,
    ) -> Result<Self, TemporalError> {
        let from = from.into().ok_or(TemporalError::InvalidNull { bound: Bound::From })?;
        let to = to.into().ok_or(TemporalError::InvalidNull { bound: Bound::To })?;
        if from > to {
            return Err(TemporalError::from_after_to(from, to));
        }
        Ok(Self { from, to: Some(to) })
    }

    /// Create a span running from `from` indefinitely
    pub fn open_from(from: impl Into<Option<LocalDateTime>>) -> Result<Self, TemporalError> {
        let from = from.into().ok_or(TemporalError::InvalidNull { bound: Bound::From })?;
        Ok(Self { from, to: None })
    }

    /// Like [`DateTimeSpan::new`] but panics if `from > to`
    #[track_caller]
    pub fn must_new(from: LocalDateTime, to: LocalDateTime) -> Self {
        Self::new(from, to).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Like [`DateTimeSpan::open_from`] but infallible for a present start
    pub fn must_open_from(from: LocalDateTime) -> Self {
        Self { from, to: None }
    }

    /// Build from bounds the caller has already ordered
    pub(crate) fn spanning(from: LocalDateTime, to: Option<LocalDateTime>) -> Self {
        debug_assert!(before_end(from, to) || to == Some(from));
        Self { from, to }
    }

    /// Inclusive start
    pub fn from(&self) -> LocalDateTime {
        self.from
    }

    /// Exclusive end, `None` if open
    pub fn to(&self) -> Option<LocalDateTime> {
        self.to
    }

    /// Whether the span has no upper bound
    pub fn is_open(&self) -> bool {
        self.to.is_none()
    }

    /// Whether the span has zero length
    pub fn is_empty(&self) -> bool {
        self.to == Some(self.from)
    }

    /// Length of a bounded span
    pub fn duration(&self) -> Option<TimeDelta> {
        self.to.map(|to| to.duration_since(self.from))
    }

    /// Whether the two spans share at least one instant
    ///
    /// Each span must start strictly before the other ends. Adjacent spans
    /// (`a.to == b.from`) and empty spans never overlap.
    pub fn overlaps(&self, other: &DateTimeSpan) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && before_end(self.from, other.to)
            && before_end(other.from, self.to)
    }

    /// Whether `other` lies entirely within this span
    pub fn contains(&self, other: &DateTimeSpan) -> bool {
        other.from >= self.from && cmp_ends(other.to, self.to) != Ordering::Greater
    }

    /// Instants covered by both spans, `None` if they do not overlap
    pub fn intersection(&self, other: &DateTimeSpan) -> Option<DateTimeSpan> {
        if !self.overlaps(other) {
            return None;
        }
        let from = self.from.max(other.from);
        let to = match cmp_ends(self.to, other.to) {
            Ordering::Greater => other.to,
            _ => self.to,
        };
        Some(Self::spanning(from, to))
    }

    /// This span minus `other`
    ///
    /// Returns `[self]` unchanged when they do not overlap. Otherwise returns
    /// the part before `other` (if any) followed by the part after `other`
    /// (if any): zero pieces when `other` covers this span, two when `other`
    /// sits strictly inside it.
    pub fn subtract(&self, other: &DateTimeSpan) -> Vec<DateTimeSpan> {
        if !self.overlaps(other) {
            return vec![*self];
        }

        let mut remainders = Vec::with_capacity(2);
        if self.from < other.from {
            remainders.push(Self::spanning(self.from, Some(other.from)));
        }
        if cmp_ends(self.to, other.to) == Ordering::Greater {
            // other.to is bounded here: nothing is greater than an open end
            if let Some(other_to) = other.to {
                remainders.push(Self::spanning(other_to, self.to));
            }
        }
        remainders
    }

    /// The daily window matching this span's times of day
    ///
    /// The span must be bounded and lie within one day, or end exactly at
    /// the following midnight (which maps to an end-of-day window). Times are
    /// truncated to minutes.
    pub fn time_span(&self) -> Result<LocalTimeSpan, TemporalError> {
        let day = self.from.date();
        match self.to {
            Some(to) if to.date() == day && to.time() != LocalTime::MIDNIGHT => {
                LocalTimeSpan::new(self.from.time(), to.time())
            }
            Some(to) if day.checked_next().map(|next| next.start()) == Some(to) => {
                Ok(LocalTimeSpan::until_end_of_day(self.from.time()))
            }
            _ => Err(TemporalError::PreconditionViolation(format!(
                "span {self} does not fit within a single day"
            ))),
        }
    }
}

impl fmt::Display for DateTimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "[{} - {})", self.from, to),
            None => write!(f, "[{} - indefinitely)", self.from),
        }
    }
}

/// Parses `from/to`, or `from/` for an open span
impl FromStr for DateTimeSpan {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once('/')
            .ok_or_else(|| TemporalError::parse("date-time span", s, "expected FROM/TO"))?;
        let from: LocalDateTime = from.trim().parse()?;
        match to.trim() {
            "" => Self::open_from(from),
            to => Self::new(from, to.parse::<LocalDateTime>()?),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SpanRepr {
    from: Option<LocalDateTime>,
    #[serde(default)]
    to: Option<LocalDateTime>,
}

impl Serialize for DateTimeSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SpanRepr {
            from: Some(self.from),
            to: self.to,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DateTimeSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = SpanRepr::deserialize(deserializer)?;
        match repr.to {
            Some(to) => Self::new(repr.from, to),
            None => Self::open_from(repr.from),
        }
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(from: &str, to: &str) -> DateTimeSpan {
        DateTimeSpan::must_new(LocalDateTime::must_parse(from), LocalDateTime::must_parse(to))
    }

    fn open(from: &str) -> DateTimeSpan {
        DateTimeSpan::must_open_from(LocalDateTime::must_parse(from))
    }

    #[test]
    fn test_overlaps() {
        let cases = [
            ("2017-10-04 09:00", "2017-10-04 20:22", "2017-10-04 10:00", "2017-10-04 11:22", true),
            ("2017-10-03 09:00", "2017-10-03 20:22", "2017-01-04 10:50", "2017-01-04 23:00", false),
            ("2017-01-04 09:00", "2017-01-04 10:00", "2017-01-04 09:30", "2017-01-04 10:30", true),
            ("2017-01-04 09:00", "2017-01-04 10:00", "2017-01-04 10:00", "2017-01-04 11:00", false),
        ];
        for (a_from, a_to, b_from, b_to, want) in cases {
            let a = span(a_from, a_to);
            let b = span(b_from, b_to);
            assert_eq!(a.overlaps(&b), want, "{a} overlaps {b}");
        }
    }

    #[test]
    fn test_empty_spans_never_overlap() {
        let point = span("2017-01-04 10:00", "2017-01-04 10:00");
        assert!(point.is_empty());
        assert!(!point.overlaps(&point));
        assert!(!point.overlaps(&span("2017-01-04 09:00", "2017-01-04 11:00")));
    }

    #[test]
    fn test_open_spans_overlap_everything_after_start() {
        let a = open("2017-01-04 10:00");
        assert!(a.overlaps(&span("2030-01-01 00:00", "2030-01-02 00:00")));
        assert!(a.overlaps(&open("2017-01-01 00:00")));
        assert!(!a.overlaps(&span("2017-01-04 09:00", "2017-01-04 10:00")));
    }

    #[test]
    fn test_contains() {
        let cases = [
            ("2017-01-04 09:00", "2017-01-04 10:00", "2017-01-04 09:00", "2017-01-04 10:00", true),
            ("2017-10-04 08:00", "2017-10-04 10:00", "2017-10-04 09:00", "2017-10-04 10:00", true),
            ("2017-01-04 10:50", "2017-01-04 23:00", "2017-10-03 09:00", "2017-10-03 10:00", false),
            ("2017-01-04 09:30", "2017-01-04 10:30", "2017-01-04 09:00", "2017-01-04 10:00", false),
        ];
        for (a_from, a_to, b_from, b_to, want) in cases {
            let a = span(a_from, a_to);
            let b = span(b_from, b_to);
            assert_eq!(a.contains(&b), want, "{a} contains {b}");
        }
    }

    #[test]
    fn test_contains_with_open_ends() {
        let bounded = span("2017-01-04 09:00", "2017-01-04 10:00");
        let unbounded = open("2017-01-04 09:00");
        assert!(unbounded.contains(&bounded));
        assert!(unbounded.contains(&unbounded));
        assert!(!bounded.contains(&unbounded));
    }

    #[test]
    fn test_new_rejects_inverted_and_null() {
        let a = LocalDateTime::must_parse("2017-01-04 10:00");
        let b = LocalDateTime::must_parse("2017-01-04 09:00");
        assert!(matches!(DateTimeSpan::new(a, b), Err(TemporalError::FromAfterTo { .. })));
        assert_eq!(
            DateTimeSpan::new(a, None),
            Err(TemporalError::InvalidNull { bound: Bound::To })
        );
        assert_eq!(
            DateTimeSpan::open_from(None),
            Err(TemporalError::InvalidNull { bound: Bound::From })
        );
    }

    #[test]
    fn test_subtract_inner_span_leaves_two_remainders() {
        let whole = span("2017-10-04 09:00", "2017-10-04 20:22");
        let hole = span("2017-10-04 10:00", "2017-10-04 11:22");
        assert_eq!(
            whole.subtract(&hole),
            vec![
                span("2017-10-04 09:00", "2017-10-04 10:00"),
                span("2017-10-04 11:22", "2017-10-04 20:22"),
            ]
        );
    }

    #[test]
    fn test_subtract_disjoint_returns_self() {
        let a = span("2017-10-04 09:00", "2017-10-04 10:00");
        let b = span("2017-10-04 10:00", "2017-10-04 11:00");
        assert_eq!(a.subtract(&b), vec![a]);
    }

    #[test]
    fn test_subtract_covering_span_leaves_nothing() {
        let a = span("2017-10-04 09:00", "2017-10-04 10:00");
        let b = span("2017-10-04 08:00", "2017-10-04 10:00");
        assert!(a.subtract(&b).is_empty());
        assert!(a.subtract(&open("2017-10-04 08:00")).is_empty());
    }

    #[test]
    fn test_subtract_partial_overlaps() {
        let a = span("2017-10-04 09:00", "2017-10-04 12:00");
        assert_eq!(
            a.subtract(&span("2017-10-04 11:00", "2017-10-04 13:00")),
            vec![span("2017-10-04 09:00", "2017-10-04 11:00")]
        );
        assert_eq!(
            a.subtract(&span("2017-10-04 08:00", "2017-10-04 10:00")),
            vec![span("2017-10-04 10:00", "2017-10-04 12:00")]
        );
    }

    #[test]
    fn test_subtract_from_open_span() {
        let a = open("2017-10-04 09:00");
        let hole = span("2017-10-04 10:00", "2017-10-04 11:00");
        assert_eq!(
            a.subtract(&hole),
            vec![span("2017-10-04 09:00", "2017-10-04 10:00"), open("2017-10-04 11:00")]
        );
    }

    #[test]
    fn test_intersection() {
        let a = span("2017-10-04 09:00", "2017-10-04 12:00");
        let b = open("2017-10-04 11:00");
        assert_eq!(a.intersection(&b), Some(span("2017-10-04 11:00", "2017-10-04 12:00")));
        assert_eq!(a.intersection(&span("2017-10-04 12:00", "2017-10-04 13:00")), None);
    }

    #[test]
    fn test_duration() {
        assert_eq!(
            span("2017-10-04 09:00", "2017-10-04 10:30").duration(),
            Some(TimeDelta::minutes(90))
        );
        assert_eq!(open("2017-10-04 09:00").duration(), None);
    }

    #[test]
    fn test_time_span() {
        let window = span("2017-10-04 09:00", "2017-10-04 10:30").time_span().unwrap();
        assert_eq!(window.to_string(), "09:00-10:30");

        let window = span("2017-10-04 22:00", "2017-10-05 00:00").time_span().unwrap();
        assert_eq!(window.to_string(), "22:00-00:00");

        assert!(span("2017-10-04 22:00", "2017-10-05 01:00").time_span().is_err());
        assert!(open("2017-10-04 22:00").time_span().is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let a = span("2017-01-04 09:00", "2017-01-04 10:00");
        assert_eq!(a.to_string(), "[2017-01-04 09:00 - 2017-01-04 10:00)");
        assert_eq!("2017-01-04 09:00/2017-01-04 10:00".parse::<DateTimeSpan>().unwrap(), a);

        let b = open("2017-01-04 09:00");
        assert_eq!(b.to_string(), "[2017-01-04 09:00 - indefinitely)");
        assert_eq!("2017-01-04 09:00/".parse::<DateTimeSpan>().unwrap(), b);

        assert!("2017-01-04 09:00".parse::<DateTimeSpan>().is_err());
        assert!("2017-01-04 10:00/2017-01-04 09:00".parse::<DateTimeSpan>().is_err());
    }

    #[test]
    fn test_json() {
        let a = span("2017-01-04 09:00", "2017-01-04 10:00");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"from":"2017-01-04 09:00","to":"2017-01-04 10:00"}"#);
        assert_eq!(serde_json::from_str::<DateTimeSpan>(&json).unwrap(), a);

        let b = open("2017-01-04 09:00");
        assert_eq!(
            serde_json::to_string(&b).unwrap(),
            r#"{"from":"2017-01-04 09:00","to":null}"#
        );

        let inverted = r#"{"from":"2017-01-04 10:00","to":"2017-01-04 09:00"}"#;
        assert!(serde_json::from_str::<DateTimeSpan>(inverted).is_err());
        assert!(serde_json::from_str::<DateTimeSpan>(r#"{"to":"2017-01-04 09:00"}"#).is_err());
    }
}
