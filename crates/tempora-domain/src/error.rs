//! Error types for the temporal algebra

use std::fmt;
use thiserror::Error;

/// Which bound of a range or span an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The lower (inclusive) bound
    From,
    /// The upper bound
    To,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::From => f.write_str("\"from\""),
            Bound::To => f.write_str("\"to\""),
        }
    }
}

/// Errors produced while constructing or parsing temporal values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    /// A required bound was absent
    #[error("Invalid time period - {bound} is null")]
    InvalidNull {
        /// The missing bound
        bound: Bound,
    },

    /// The lower bound is after the upper bound
    #[error("Invalid time period - \"from\" ({from}) is after \"to\" ({to})")]
    FromAfterTo {
        /// Rendered lower bound
        from: String,
        /// Rendered upper bound
        to: String,
    },

    /// Malformed textual input
    #[error("Invalid {kind} format: {input:?} ({reason})")]
    Parse {
        /// What was being parsed ("date", "time", ...)
        kind: &'static str,
        /// The offending input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// A numeric component outside its valid range
    #[error("{field} out of range: {value}")]
    InvalidComponent {
        /// Name of the component ("hour", "month", ...)
        field: &'static str,
        /// The rejected value
        value: i64,
    },

    /// An operation was called on a value it is not defined for
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),
}

impl TemporalError {
    pub(crate) fn parse(kind: &'static str, input: &str, reason: impl fmt::Display) -> Self {
        TemporalError::Parse {
            kind,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn from_after_to(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        TemporalError::FromAfterTo {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
