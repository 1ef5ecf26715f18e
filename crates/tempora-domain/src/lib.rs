//! Tempora Domain Layer
//!
//! Calendar value types and the interval algebra built on them. Everything
//! here is an immutable value with pure operations; persistence and the
//! current time live in other crates.
//!
//! ## Key Concepts
//!
//! - **LocalDate / LocalTime / LocalDateTime**: civil values with no timezone
//! - **Period**: an inclusive range of dates, possibly open-ended
//! - **DateTimeSpan**: a half-open range of date-times, possibly open-ended
//! - **LocalTimeSpan**: a daily window where an end of `00:00` means end of day
//! - **Absence**: a missing value is `Option::None`, never a sentinel
//!
//! ## Text forms
//!
//! Every scalar has one canonical text form shared by `Display`, `FromStr`
//! and serde: `2017-01-04`, `09:30`, `2017-01-04 09:30`, `09:00-17:00`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod text;

pub mod date_time_span;
pub mod error;
pub mod local_date;
pub mod local_date_time;
pub mod local_time;
pub mod period;
pub mod time_span;
pub mod unix;
pub mod weekday;

// Re-exports for convenience
pub use chrono::TimeDelta;
pub use date_time_span::DateTimeSpan;
pub use error::{Bound, TemporalError};
pub use local_date::LocalDate;
pub use local_date_time::LocalDateTime;
pub use local_time::LocalTime;
pub use period::{Days, Period};
pub use text::TextValue;
pub use time_span::{LocalTimeSpan, SpanEnd};
pub use unix::UnixTimestamp;
pub use weekday::Weekday;
