//! Analyze command implementation

use crate::domain::EntityType;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads stdin when neither text nor --file is given)
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Language of the text
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Restrict detection to these entity types (e.g. EMAIL_ADDRESS,US_SSN)
    #[arg(short, long, value_delimiter = ',')]
    pub entities: Vec<String>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let engine = super::load_engine(config_path)?;
        let text = super::read_input(self.text.as_deref(), self.file.as_deref())?;

        let filter: Option<Vec<EntityType>> = if self.entities.is_empty() {
            None
        } else {
            Some(self.entities.iter().map(|e| EntityType::from(e.as_str())).collect())
        };

        let matches = engine.analyze(&text, filter.as_deref(), &self.language);
        tracing::info!(matches = matches.len(), "Analysis complete");

        println!("{}", serde_json::to_string_pretty(&matches)?);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_with_inline_text_and_entity_filter() {
        let args = AnalyzeArgs {
            text: Some("SSN 123-45-6789 and jane.d@example.com".to_string()),
            file: None,
            language: "en".to_string(),
            entities: vec!["US_SSN".to_string()],
        };
        // Missing config file falls back to built-in defaults
        assert_eq!(args.execute("/nonexistent/deidentify.toml").unwrap(), 0);
    }

    #[test]
    fn test_execute_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("note.txt");
        std::fs::write(&input, "Contact jane.d@example.com now").unwrap();

        let args = AnalyzeArgs {
            text: None,
            file: Some(input),
            language: "en".to_string(),
            entities: vec![],
        };
        assert_eq!(args.execute("/nonexistent/deidentify.toml").unwrap(), 0);
    }
}
