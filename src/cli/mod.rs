//! CLI interface and argument parsing
//!
//! Command-line interface for the de-identification engine using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Deidentify - PII detection and de-identification tool
#[derive(Parser, Debug)]
#[command(name = "deidentify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "deidentify.toml", env = "DEID_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DEID_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect PII spans in text and print them as JSON
    Analyze(commands::analyze::AnalyzeArgs),

    /// De-identify text with a named strategy
    Deidentify(commands::deidentify::DeidentifyArgs),

    /// De-identify the free-text fields of a JSON patient record
    Record(commands::record::RecordArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_analyze() {
        let cli = Cli::parse_from(["deidentify", "analyze", "some text"]);
        assert_eq!(cli.config, "deidentify.toml");
        assert!(matches!(cli.command, Commands::Analyze(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["deidentify", "--config", "custom.toml", "analyze", "x"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["deidentify", "--log-level", "debug", "analyze", "x"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_deidentify_strategy() {
        let cli = Cli::parse_from(["deidentify", "deidentify", "--strategy", "hash", "x"]);
        match cli.command {
            Commands::Deidentify(args) => assert_eq!(args.strategy, "hash"),
            _ => panic!("expected deidentify subcommand"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["deidentify", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_record() {
        let cli = Cli::parse_from(["deidentify", "record", "--file", "patient.json"]);
        assert!(matches!(cli.command, Commands::Record(_)));
    }
}
