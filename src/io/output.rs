use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::QaReport;
use crate::pipeline::CleaningOutcome;

/// Write the cleaned transcript to a file
pub fn write_transcript(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write transcript: {:?}", path))
}

/// Machine-readable summary of a cleaning run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub chunk_count: usize,
    pub fallback_count: usize,
    /// Absent when the quality check collaborator failed
    pub quality: Option<QaReport>,
}

impl RunReport {
    pub fn from_outcome(outcome: &CleaningOutcome) -> Self {
        Self {
            run_id: outcome.run_id.clone(),
            generated_at: Utc::now(),
            chunk_count: outcome.chunk_count,
            fallback_count: outcome.fallback_count,
            quality: outcome.quality.clone(),
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_transcript_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.txt");

        write_transcript(&path, "Alice: Hello.").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Alice: Hello.");
    }

    #[test]
    fn test_run_report_json_shape() {
        let outcome = CleaningOutcome {
            run_id: "run-1".to_string(),
            cleaned_text: "Alice: Hello.".to_string(),
            chunk_count: 3,
            fallback_count: 1,
            quality: Some(QaReport {
                quality_score: 88,
                issues: vec!["minor rewording".to_string()],
                content_loss_detected: false,
            }),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        RunReport::from_outcome(&outcome).write_json(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["run_id"], "run-1");
        assert_eq!(json["chunk_count"], 3);
        assert_eq!(json["fallback_count"], 1);
        assert_eq!(json["quality"]["quality_score"], 88);
    }
}
