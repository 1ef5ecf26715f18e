//! Integration tests for tempora-store
//!
//! Each test writes domain values through the wrappers into an in-memory
//! SQLite database and reads them back.

use rusqlite::{params, Connection};
use tempora_domain::{LocalDate, LocalDateTime, LocalTime, UnixTimestamp, Weekday};
use tempora_store::{SqlDate, SqlDateTime, SqlTime, SqlUnixTimestamp, SqlWeekday, ToSqlColumn};

fn schedule_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE schedule (
            id INTEGER PRIMARY KEY,
            day TEXT,
            opens TEXT,
            starts_at TEXT,
            weekday TEXT,
            stamp INTEGER
        );",
    )
    .unwrap();
    conn
}

#[test]
fn test_all_columns_round_trip() {
    let conn = schedule_db();

    let day = LocalDate::must_new(2018, 1, 2);
    let opens = LocalTime::must_new(8, 15);
    let starts_at = LocalDateTime::must_parse("2018-01-02 15:04");
    let weekday = Weekday::Tuesday;
    let stamp = UnixTimestamp::from_secs(1_514_905_445);

    conn.execute(
        "INSERT INTO schedule (id, day, opens, starts_at, weekday, stamp)
         VALUES (1, ?1, ?2, ?3, ?4, ?5)",
        params![
            day.to_sql_column(),
            opens.to_sql_column(),
            starts_at.to_sql_column(),
            weekday.to_sql_column(),
            stamp.to_sql_column(),
        ],
    )
    .unwrap();

    let row = conn
        .query_row(
            "SELECT day, opens, starts_at, weekday, stamp FROM schedule WHERE id = 1",
            [],
            |row| {
                Ok((
                    row.get::<_, SqlDate>(0)?,
                    row.get::<_, SqlTime>(1)?,
                    row.get::<_, SqlDateTime>(2)?,
                    row.get::<_, SqlWeekday>(3)?,
                    row.get::<_, SqlUnixTimestamp>(4)?,
                ))
            },
        )
        .unwrap();

    assert_eq!(row.0.to_domain(), day);
    assert_eq!(row.1.to_domain(), opens);
    assert_eq!(row.2.to_domain(), starts_at);
    assert_eq!(row.3.to_domain(), weekday);
    assert_eq!(row.4.to_domain(), stamp);
}

#[test]
fn test_stored_text_forms() {
    let conn = schedule_db();
    conn.execute(
        "INSERT INTO schedule (id, day, opens, starts_at, weekday) VALUES (1, ?1, ?2, ?3, ?4)",
        params![
            LocalDate::must_new(2018, 1, 2).to_sql_column(),
            LocalTime::must_new(8, 15).to_sql_column(),
            LocalDateTime::must_parse("2018-01-02 15:04").to_sql_column(),
            Weekday::Friday.to_sql_column(),
        ],
    )
    .unwrap();

    let texts: (String, String, String, String) = conn
        .query_row(
            "SELECT day, opens, starts_at, weekday FROM schedule WHERE id = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )
        .unwrap();

    assert_eq!(texts.0, "2018-01-02");
    assert_eq!(texts.1, "08:15");
    assert_eq!(texts.2, "2018-01-02 15:04:00");
    assert_eq!(texts.3, "FRIDAY");
}

#[test]
fn test_null_reads_as_none() {
    let conn = schedule_db();
    let missing: Option<LocalDate> = None;
    conn.execute(
        "INSERT INTO schedule (id, day) VALUES (1, ?1)",
        params![missing.to_sql_column()],
    )
    .unwrap();

    let (day, opens): (Option<SqlDate>, Option<SqlTime>) = conn
        .query_row("SELECT day, opens FROM schedule WHERE id = 1", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(day, None);
    assert_eq!(opens, None);
}

#[test]
fn test_null_into_bare_wrapper_fails() {
    let conn = schedule_db();
    conn.execute("INSERT INTO schedule (id) VALUES (1)", []).unwrap();

    let result = conn.query_row("SELECT day FROM schedule WHERE id = 1", [], |row| {
        row.get::<_, SqlDate>(0)
    });
    assert!(result.is_err());
}

#[test]
fn test_sqlite_generated_values_decode() {
    let conn = Connection::open_in_memory().unwrap();
    let (time, date_time): (SqlTime, SqlDateTime) = conn
        .query_row(
            "SELECT time('2018-01-02 15:04:05'), datetime('2018-01-02T15:04:05')",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();

    assert_eq!(time.to_domain(), LocalTime::must_new(15, 4));
    assert_eq!(
        date_time.to_domain().to_sql_text(),
        "2018-01-02 15:04:05"
    );
}

#[test]
fn test_weekday_reads_any_case() {
    let conn = Connection::open_in_memory().unwrap();
    let day: SqlWeekday = conn
        .query_row("SELECT 'sunday'", [], |row| row.get(0))
        .unwrap();
    assert_eq!(day.to_domain(), Weekday::Sunday);
}

#[test]
fn test_malformed_text_is_a_decode_error() {
    let conn = Connection::open_in_memory().unwrap();
    let err = conn
        .query_row("SELECT '2018-13-45'", [], |row| row.get::<_, SqlDate>(0))
        .unwrap_err();
    assert!(matches!(err, rusqlite::Error::FromSqlConversionFailure(..)));
    assert!(err.to_string().contains("2018-13-45"));
}

#[test]
fn test_filter_by_date_range() {
    let conn = schedule_db();
    for (id, day) in ["2018-01-01", "2018-01-15", "2018-02-01"].iter().enumerate() {
        conn.execute(
            "INSERT INTO schedule (id, day) VALUES (?1, ?2)",
            params![id as i64, LocalDate::must_parse(day).to_sql_column()],
        )
        .unwrap();
    }

    let mut stmt = conn
        .prepare("SELECT day FROM schedule WHERE day BETWEEN ?1 AND ?2 ORDER BY day")
        .unwrap();
    let days: Vec<LocalDate> = stmt
        .query_map(
            params![
                LocalDate::must_new(2018, 1, 1).to_sql_column(),
                LocalDate::must_new(2018, 1, 31).to_sql_column(),
            ],
            |row| row.get::<_, SqlDate>(0),
        )
        .unwrap()
        .map(|day| day.unwrap().to_domain())
        .collect();

    assert_eq!(
        days,
        [LocalDate::must_new(2018, 1, 1), LocalDate::must_new(2018, 1, 15)]
    );
}
