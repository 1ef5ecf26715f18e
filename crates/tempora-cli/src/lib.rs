//! Tempora CLI library.
//!
//! This library provides the core functionality for the `tempora` command-line
//! interface: argument parsing, configuration, command execution and output
//! formatting. Commands return their rendered output so they can be tested
//! without a terminal.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
