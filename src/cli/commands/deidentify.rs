//! Deidentify command implementation

use clap::Args;
use std::path::PathBuf;

/// Arguments for the deidentify command
#[derive(Args, Debug)]
pub struct DeidentifyArgs {
    /// Text to de-identify (reads stdin when neither text nor --file is given)
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Anonymization strategy (mask, hash)
    #[arg(short, long, default_value = "mask")]
    pub strategy: String,

    /// Language of the text
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl DeidentifyArgs {
    /// Execute the deidentify command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let engine = super::load_engine(config_path)?;
        let text = super::read_input(self.text.as_deref(), self.file.as_deref())?;

        let result = engine.deidentify(&text, &self.strategy, &self.language)?;
        tracing::info!(strategy = %self.strategy, "De-identification complete");

        match &self.output {
            Some(path) => std::fs::write(path, result)?,
            None => println!("{result}"),
        }
        Ok(0)
    }
}
