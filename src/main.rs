// Deidentify - PII Detection and De-identification Engine
// Copyright (c) 2025 Deidentify Contributors
// Licensed under the MIT License

use clap::Parser;
use deidentify::cli::{Cli, Commands};
use deidentify::config::LoggingConfig;
use deidentify::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Console-only logging for the CLI; file logging is for library embedders
    let logging_config = LoggingConfig {
        level: cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
        ..Default::default()
    };
    let _guard = match init_logging(&logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Deidentify starting");

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Analyze(args) => args.execute(&cli.config),
        Commands::Deidentify(args) => args.execute(&cli.config),
        Commands::Record(args) => args.execute(&cli.config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
    }
}
