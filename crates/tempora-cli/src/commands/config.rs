//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<String> {
    match args.action {
        ConfigAction::Show => {
            let text = config.to_toml()?;
            formatter.render(config, || text)
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Ok(formatter.info(&format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save(path)?;
            Ok(formatter.success(&format!("Wrote {}", path.display())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Text, false);

        let init = || ConfigArgs {
            action: ConfigAction::Init { force: false },
        };

        let output = execute_config(init(), &Config::default(), &path, &formatter).unwrap();
        assert!(output.starts_with("✓ Wrote"));
        assert_eq!(Config::load(&path).unwrap(), Config::default());

        let output = execute_config(init(), &Config::default(), &path, &formatter).unwrap();
        assert!(output.contains("already exists"));
    }

    #[test]
    fn test_show_json() {
        let dir = tempfile::tempdir().unwrap();
        let formatter = Formatter::new(OutputFormat::Json, false);
        let args = ConfigArgs {
            action: ConfigAction::Show,
        };

        let output =
            execute_config(args, &Config::default(), &dir.path().join("c.toml"), &formatter).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["clock"]["timezone"], "Europe/Warsaw");
        assert_eq!(value["clock"]["source"]["kind"], "system");
        assert_eq!(value["settings"]["format"], "text");
    }
}
