//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tempora_domain::{DateTimeSpan, LocalDate, LocalTimeSpan};

/// Tempora CLI - Inspect dates, spans and daily windows.
#[derive(Debug, Parser)]
#[command(name = "tempora")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TEMPORA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show today, the current local time and the Unix timestamp
    Now,

    /// List every day of a period
    Days(DaysArgs),

    /// Check whether two spans overlap
    Overlaps(SpanPairArgs),

    /// Check whether the first span contains the second
    Contains(SpanPairArgs),

    /// Remove the second span from the first
    Subtract(SpanPairArgs),

    /// Compare a daily window against a span
    Window(WindowArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the days command.
#[derive(Debug, Parser)]
pub struct DaysArgs {
    /// First day (YYYY-MM-DD)
    pub from: LocalDate,

    /// Last day, inclusive (YYYY-MM-DD)
    pub to: LocalDate,
}

/// Two spans, each written as `FROM/TO` with `YYYY-MM-DD HH:MM` bounds.
///
/// Leave `TO` empty (`2017-01-04 09:00/`) for an open-ended span.
#[derive(Debug, Parser)]
pub struct SpanPairArgs {
    /// First span
    pub a: DateTimeSpan,

    /// Second span
    pub b: DateTimeSpan,
}

/// Arguments for the window command.
#[derive(Debug, Parser)]
pub struct WindowArgs {
    /// Daily window (HH:MM-HH:MM, an end of 00:00 means end of day)
    pub window: LocalTimeSpan,

    /// Span to compare against (FROM/TO)
    pub span: DateTimeSpan,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration if no file exists
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_command() {
        let cli = Cli::parse_from(["tempora", "days", "2017-01-04", "2017-01-06"]);
        match cli.command {
            Command::Days(args) => {
                assert_eq!(args.from, LocalDate::must_new(2017, 1, 4));
                assert_eq!(args.to, LocalDate::must_new(2017, 1, 6));
            }
            _ => panic!("Expected Days command"),
        }
    }

    #[test]
    fn test_span_arguments_are_parsed() {
        let cli = Cli::parse_from([
            "tempora",
            "overlaps",
            "2017-01-04 09:00/2017-01-04 10:00",
            "2017-01-04 09:30/",
        ]);
        match cli.command {
            Command::Overlaps(args) => {
                assert!(!args.a.is_open());
                assert!(args.b.is_open());
            }
            _ => panic!("Expected Overlaps command"),
        }
    }

    #[test]
    fn test_invalid_span_rejected() {
        let result = Cli::try_parse_from([
            "tempora",
            "contains",
            "2017-01-04 10:00/2017-01-04 09:00",
            "2017-01-04 09:30/",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["tempora", "now", "--format", "json", "--no-color"]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Now));
    }
}
