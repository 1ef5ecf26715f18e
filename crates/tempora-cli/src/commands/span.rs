//! Span comparison commands: overlaps, contains and subtract.

use crate::cli::SpanPairArgs;
use crate::error::Result;
use crate::output::Formatter;
use serde::Serialize;
use tempora_domain::DateTimeSpan;

#[derive(Serialize)]
struct OverlapReport {
    overlaps: bool,
    intersection: Option<DateTimeSpan>,
}

#[derive(Serialize)]
struct ContainsReport {
    contains: bool,
}

/// Execute the overlaps command.
pub fn execute_overlaps(args: SpanPairArgs, formatter: &Formatter) -> Result<String> {
    let report = OverlapReport {
        overlaps: args.a.overlaps(&args.b),
        intersection: args.a.intersection(&args.b),
    };

    formatter.render(&report, || {
        let mut lines = vec![formatter.answer("overlaps", report.overlaps)];
        if let Some(common) = report.intersection {
            lines.push(formatter.field("common", common));
        }
        lines.join("\n")
    })
}

/// Execute the contains command.
pub fn execute_contains(args: SpanPairArgs, formatter: &Formatter) -> Result<String> {
    let report = ContainsReport {
        contains: args.a.contains(&args.b),
    };
    formatter.render(&report, || formatter.answer("contains", report.contains))
}

/// Execute the subtract command.
pub fn execute_subtract(args: SpanPairArgs, formatter: &Formatter) -> Result<String> {
    let remainders = args.a.subtract(&args.b);
    formatter.render(&remainders, || formatter.spans(&remainders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn args(a: &str, b: &str) -> SpanPairArgs {
        SpanPairArgs {
            a: a.parse().unwrap(),
            b: b.parse().unwrap(),
        }
    }

    #[test]
    fn test_adjacent_spans_do_not_overlap() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = execute_overlaps(
            args("2017-01-04 09:00/2017-01-04 10:00", "2017-01-04 10:00/2017-01-04 11:00"),
            &formatter,
        )
        .unwrap();
        assert_eq!(output, "overlaps: no");
    }

    #[test]
    fn test_overlap_reports_common_part() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = execute_overlaps(
            args("2017-01-04 09:00/2017-01-04 10:00", "2017-01-04 09:30/"),
            &formatter,
        )
        .unwrap();
        assert_eq!(
            output,
            "overlaps: yes\ncommon: [2017-01-04 09:30 - 2017-01-04 10:00)"
        );
    }

    #[test]
    fn test_contains_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = execute_contains(
            args("2017-01-04 09:00/", "2017-01-04 09:30/2017-01-04 10:00"),
            &formatter,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["contains"], true);
    }

    #[test]
    fn test_subtract_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = execute_subtract(
            args("2017-10-04 09:00/2017-10-04 20:22", "2017-10-04 10:00/2017-10-04 11:22"),
            &formatter,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "from": "2017-10-04 09:00", "to": "2017-10-04 10:00" },
                { "from": "2017-10-04 11:22", "to": "2017-10-04 20:22" },
            ])
        );
    }
}
