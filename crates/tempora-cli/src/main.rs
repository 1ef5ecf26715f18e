//! Tempora CLI - Command-line interface for the Tempora temporal algebra.

use clap::Parser;
use tempora_cli::commands;
use tempora_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing (log to stderr, RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run().await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> tempora_cli::Result<String> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load(&path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    tracing::debug!(command = ?cli.command, "running command");

    match cli.command {
        Command::Now => commands::execute_now(&config, &formatter).await,
        Command::Days(args) => commands::execute_days(args, &formatter),
        Command::Overlaps(args) => commands::execute_overlaps(args, &formatter),
        Command::Contains(args) => commands::execute_contains(args, &formatter),
        Command::Subtract(args) => commands::execute_subtract(args, &formatter),
        Command::Window(args) => commands::execute_window(args, &formatter),
        Command::Config(args) => commands::execute_config(args, &config, &path, &formatter),
    }
}
