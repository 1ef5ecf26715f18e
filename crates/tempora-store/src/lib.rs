//! Tempora Storage Layer
//!
//! SQLite column types for the domain values, for use with `rusqlite`.
//!
//! # Architecture
//!
//! The domain crate does not depend on `rusqlite`, and `rusqlite`'s traits
//! cannot be implemented on foreign types here, so each value gets a thin
//! wrapper implementing [`rusqlite::ToSql`] and [`rusqlite::types::FromSql`]:
//!
//! | Domain type     | Wrapper            | Column                  |
//! |-----------------|--------------------|-------------------------|
//! | `LocalDate`     | [`SqlDate`]        | `TEXT` `YYYY-MM-DD`     |
//! | `LocalTime`     | [`SqlTime`]        | `TEXT` `HH:MM`          |
//! | `LocalDateTime` | [`SqlDateTime`]    | `TEXT` `YYYY-MM-DD HH:MM:SS` |
//! | `Weekday`       | [`SqlWeekday`]     | `TEXT` `MONDAY`         |
//! | `UnixTimestamp` | [`SqlUnixTimestamp`] | `INTEGER`             |
//!
//! A nullable column reads into `Option<SqlDate>` and friends; reading `NULL`
//! into a bare wrapper is an error.
//!
//! # Examples
//!
//! ```
//! use rusqlite::Connection;
//! use tempora_domain::LocalDate;
//! use tempora_store::{SqlDate, ToSqlColumn};
//!
//! let conn = Connection::open_in_memory()?;
//! conn.execute("CREATE TABLE holidays (day TEXT)", [])?;
//!
//! let day = LocalDate::must_new(2018, 11, 11);
//! conn.execute("INSERT INTO holidays (day) VALUES (?1)", [day.to_sql_column()])?;
//!
//! let stored: SqlDate = conn.query_row("SELECT day FROM holidays", [], |row| row.get(0))?;
//! assert_eq!(stored.to_domain(), day);
//! # Ok::<(), rusqlite::Error>(())
//! ```

#![warn(missing_docs)]

mod sqlite;
mod wrappers;

pub use wrappers::{SqlDate, SqlDateTime, SqlTime, SqlUnixTimestamp, SqlWeekday, ToSqlColumn};
