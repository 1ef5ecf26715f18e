//! Window command implementation.

use crate::cli::WindowArgs;
use crate::error::Result;
use crate::output::Formatter;
use serde::Serialize;
use tempora_domain::{DateTimeSpan, LocalTimeSpan};

/// How a daily window relates to a span.
#[derive(Debug, Serialize)]
pub struct WindowReport {
    /// The window
    pub window: LocalTimeSpan,
    /// Window length in minutes
    pub duration_minutes: i64,
    /// The window placed on the day the span starts
    pub on_day: DateTimeSpan,
    /// Whether the window overlaps the span
    pub overlaps: bool,
    /// Whether the window contains the span
    pub contains: bool,
}

/// Execute the window command.
pub fn execute_window(args: WindowArgs, formatter: &Formatter) -> Result<String> {
    let report = window_report(args.window, &args.span);

    formatter.render(&report, || {
        [
            formatter.field("window", report.window),
            formatter.field("duration", format!("{} min", report.duration_minutes)),
            formatter.field("on day", report.on_day),
            formatter.answer("overlaps", report.overlaps),
            formatter.answer("contains", report.contains),
        ]
        .join("\n")
    })
}

/// Compare `window` against `span`.
pub fn window_report(window: LocalTimeSpan, span: &DateTimeSpan) -> WindowReport {
    WindowReport {
        window,
        duration_minutes: window.duration().num_minutes(),
        on_day: window.project_onto(span.from().date()),
        overlaps: window.overlaps_date_time_span(span),
        contains: window.contains_date_time_span(span),
    }
}
