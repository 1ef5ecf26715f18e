//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tempora_domain::{DateTimeSpan, LocalDate};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Render `value` as pretty JSON, or as `text` in text mode.
    pub fn render<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Text => Ok(text()),
        }
    }

    /// Format days as a table of date and weekday.
    pub fn days_table(&self, days: &[LocalDate]) -> String {
        if days.is_empty() {
            return self.colorize("No days.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Date", "Weekday"]);
        for day in days {
            builder.push_record([day.to_string(), day.weekday().to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format spans one per line.
    pub fn spans(&self, spans: &[DateTimeSpan]) -> String {
        if spans.is_empty() {
            return self.colorize("Nothing left.", "yellow");
        }
        spans
            .iter()
            .map(|span| self.colorize(&span.to_string(), "cyan"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a yes/no answer.
    pub fn answer(&self, question: &str, yes: bool) -> String {
        if yes {
            format!("{}: {}", question, self.colorize("yes", "green"))
        } else {
            format!("{}: {}", question, self.colorize("no", "red"))
        }
    }

    /// Format a labelled value.
    pub fn field(&self, label: &str, value: impl std::fmt::Display) -> String {
        format!("{} {}", self.colorize(&format!("{label}:"), "blue"), value)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
