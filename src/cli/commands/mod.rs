//! CLI command implementations

pub mod analyze;
pub mod deidentify;
pub mod record;
pub mod validate;

use crate::config::DeidentifyConfig;
use crate::engine::Deidentifier;
use std::path::Path;

/// Load the engine from the config file, or defaults if the file is absent
///
/// A missing config file is not an error for the text commands: the engine
/// falls back to built-in defaults plus `DEID_*` environment overrides.
pub(crate) fn load_engine(config_path: &str) -> anyhow::Result<Deidentifier> {
    let config = if Path::new(config_path).exists() {
        DeidentifyConfig::from_file(config_path)?
    } else {
        tracing::debug!(config_path, "Config file not found, using defaults");
        let mut config = DeidentifyConfig::default();
        config.apply_env_overrides()?;
        config
    };
    Ok(Deidentifier::from_config(&config)?)
}

/// Resolve command input: inline text, a file, or stdin
pub(crate) fn read_input(text: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    match (text, file) {
        (Some(t), None) => Ok(t.to_string()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => {
            use std::io::Read;
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        (Some(_), Some(_)) => anyhow::bail!("Provide either inline text or --file, not both"),
    }
}
