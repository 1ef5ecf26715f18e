//! Days command implementation.

use crate::cli::DaysArgs;
use crate::error::Result;
use crate::output::Formatter;
use tempora_domain::{LocalDate, Period};

/// Execute the days command.
pub fn execute_days(args: DaysArgs, formatter: &Formatter) -> Result<String> {
    let period = Period::new(args.from, args.to)?;
    let days: Vec<LocalDate> = period.days()?.collect();
    tracing::debug!(%period, count = days.len(), "enumerated period");

    formatter.render(&days, || formatter.days_table(&days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;

    fn args(from: &str, to: &str) -> DaysArgs {
        DaysArgs {
            from: LocalDate::must_parse(from),
            to: LocalDate::must_parse(to),
        }
    }

    #[test]
    fn test_days_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = execute_days(args("2016-12-31", "2017-01-01"), &formatter).unwrap();
        let days: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(days, ["2016-12-31", "2017-01-01"]);
    }

    #[test]
    fn test_inverted_period() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let err = execute_days(args("2017-01-02", "2017-01-01"), &formatter).unwrap_err();
        assert!(matches!(err, CliError::Temporal(_)));
        assert!(err.to_string().contains("is after"));
    }
}
