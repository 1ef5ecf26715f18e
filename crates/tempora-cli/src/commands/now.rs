//! Now command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use serde::Serialize;
use tempora_clock::{Clock, TimeContext};
use tempora_domain::{LocalDate, LocalDateTime, LocalTime, UnixTimestamp};

/// What the clock reports for one captured instant.
#[derive(Debug, Serialize)]
pub struct NowReport {
    /// Configured timezone name
    pub timezone: String,
    /// Local date
    pub today: LocalDate,
    /// Local date-time
    pub now: LocalDateTime,
    /// Local time of day
    pub wall_time: LocalTime,
    /// Seconds since the epoch
    pub unix: i64,
    /// Seconds until the next local midnight
    pub seconds_until_midnight: i64,
}

/// Execute the now command.
pub async fn execute_now(config: &Config, formatter: &Formatter) -> Result<String> {
    let source = config.clock.build_source()?;
    let clock = config.clock.build_clock()?;
    let ctx = TimeContext::capture(&source).await?;

    let report = now_report(&clock, &ctx, &config.clock.timezone)?;
    formatter.render(&report, || {
        [
            formatter.field("timezone", &report.timezone),
            formatter.field("today", report.today),
            formatter.field("now", report.now),
            formatter.field("wall time", report.wall_time),
            formatter.field("unix", report.unix),
            formatter.field("until midnight", format!("{}s", report.seconds_until_midnight)),
        ]
        .join("\n")
    })
}

/// Read everything the report needs from `clock` at `ctx`.
pub fn now_report(clock: &impl Clock, ctx: &TimeContext, timezone: &str) -> Result<NowReport> {
    let today = clock.today(ctx);
    let midnight = clock.to_unix_timestamp(today.end())?;

    Ok(NowReport {
        timezone: timezone.to_string(),
        today,
        now: clock.now(ctx),
        wall_time: clock.wall_time(ctx),
        unix: UnixTimestamp::from(ctx.instant()).as_secs(),
        seconds_until_midnight: midnight.seconds_to(ctx.instant()),
    })
}
