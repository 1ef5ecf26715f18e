//! Tempora Clock Layer
//!
//! Where "now" comes from and how it becomes civil time.
//!
//! # Architecture
//!
//! - [`TimeSource`]: yields the current UTC instant (system, fixed or remote)
//! - [`TimeContext`]: one instant captured per request and passed around
//! - [`Clock`]: maps a context to local dates and times in a timezone
//!
//! Only the REST source performs I/O. Everything else is a pure function of
//! the captured instant, so tests can pin time with [`FixedSource`] or
//! [`StubClock`].
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempora_clock::{Clock, FixedSource, TimeContext, ZonedClock};
//!
//! let source = FixedSource::new(Utc.with_ymd_and_hms(2018, 7, 1, 22, 30, 0).unwrap());
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let ctx = runtime.block_on(TimeContext::capture(&source)).unwrap();
//!
//! let clock = ZonedClock::default();
//! assert_eq!(clock.today(&ctx).to_string(), "2018-07-02");
//! ```

#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod source;

pub use clock::{Clock, StubClock, ZonedClock, DEFAULT_TIMEZONE};
pub use config::{ClockConfig, SourceConfig};
pub use context::TimeContext;
pub use error::ClockError;
pub use source::{ConfiguredSource, FixedSource, RestSource, SystemSource, TimeSource};
