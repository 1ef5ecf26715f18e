use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use tempora_domain::{
    LocalDate, LocalDateTime, LocalTime, TemporalError, UnixTimestamp, Weekday,
};

use crate::{SqlDate, SqlDateTime, SqlTime, SqlUnixTimestamp, SqlWeekday};

fn decode_error(err: TemporalError) -> FromSqlError {
    FromSqlError::Other(Box::new(err))
}

impl ToSql for SqlDate {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_domain().to_string()))
    }
}

impl FromSql for SqlDate {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse::<LocalDate>().map(SqlDate::from).map_err(decode_error)
    }
}

impl ToSql for SqlTime {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_domain().to_string()))
    }
}

impl FromSql for SqlTime {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        // SQLite's time() produces HH:MM:SS
        let text = value.as_str()?;
        LocalTime::parse_sql_text(text).map(SqlTime::from).map_err(decode_error)
    }
}

impl ToSql for SqlDateTime {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_domain().to_sql_text()))
    }
}

impl FromSql for SqlDateTime {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        LocalDateTime::parse_sql_text(text).map(SqlDateTime::from).map_err(decode_error)
    }
}

impl ToSql for SqlWeekday {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_domain().sql_name()))
    }
}

impl FromSql for SqlWeekday {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse::<Weekday>().map(SqlWeekday::from).map_err(decode_error)
    }
}

impl ToSql for SqlUnixTimestamp {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_domain().as_secs()))
    }
}

impl FromSql for SqlUnixTimestamp {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_i64()
            .map(|secs| SqlUnixTimestamp::from(UnixTimestamp::from_secs(secs)))
    }
}
