//! Record command implementation
//!
//! De-identifies the free-text fields of a JSON patient record read from a
//! file and writes the transformed record back out.

use crate::record::deidentify_patient_record;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the record command
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// JSON file containing the patient record
    #[arg(short, long)]
    pub file: PathBuf,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RecordArgs {
    /// Execute the record command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let engine = super::load_engine(config_path)?;

        let content = std::fs::read_to_string(&self.file)?;
        let mut record: serde_json::Value = serde_json::from_str(&content)?;

        deidentify_patient_record(&mut record, &engine)?;
        tracing::info!(file = %self.file.display(), "Record de-identified");

        let rendered = serde_json::to_string_pretty(&record)?;
        match &self.output {
            Some(path) => std::fs::write(path, rendered)?,
            None => println!("{rendered}"),
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_rewrites_record_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("patient.json");
        let output = dir.path().join("out.json");
        std::fs::write(
            &input,
            r#"{"age": 42, "summary": "email jane.d@example.com"}"#,
        )
        .unwrap();

        let args = RecordArgs {
            file: input,
            output: Some(output.clone()),
        };
        assert_eq!(args.execute("/nonexistent/deidentify.toml").unwrap(), 0);

        let record: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(record["age"], 42);
        assert!(!record["summary"].as_str().unwrap().contains("jane.d@example.com"));
    }

    #[test]
    fn test_execute_fails_on_missing_record_file() {
        let args = RecordArgs {
            file: PathBuf::from("/nonexistent/patient.json"),
            output: None,
        };
        assert!(args.execute("/nonexistent/deidentify.toml").is_err());
    }
}
