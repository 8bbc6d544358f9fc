//! Validate config command implementation

use crate::config::DeidentifyConfig;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let config = match DeidentifyConfig::from_file(config_path) {
            Ok(c) => {
                println!("Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Language: {}", config.language);
                match &config.pattern_library {
                    Some(path) => println!("  Pattern Library: {}", path.display()),
                    None => println!("  Pattern Library: (none)"),
                }
                println!("  Log Level: {}", config.logging.level);
                println!("  File Logging: {}", config.logging.file_enabled);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_execute_valid_config_returns_success() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "language = \"en\"").unwrap();

        let args = ValidateArgs {};
        assert_eq!(args.execute(file.path().to_str().unwrap()).unwrap(), 0);
    }

    #[test]
    fn test_execute_missing_config_returns_config_error_code() {
        let args = ValidateArgs {};
        assert_eq!(args.execute("/nonexistent/deidentify.toml").unwrap(), 2);
    }

    #[test]
    fn test_execute_invalid_config_returns_config_error_code() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "language = \"\"").unwrap();

        let args = ValidateArgs {};
        assert_eq!(args.execute(file.path().to_str().unwrap()).unwrap(), 2);
    }
}
