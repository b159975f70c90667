use serde::{Deserialize, Serialize};

/// Raw quality assessment as returned by the language model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QaAssessment {
    /// Overall quality score, 0-100
    #[serde(default)]
    pub quality_score: u8,
    /// Problems the reviewer found in the processed transcript
    #[serde(default)]
    pub issues_found: Vec<String>,
    /// Whether content from the original appears to be missing
    #[serde(default)]
    pub content_loss_detected: bool,
    /// Suggestions for improving the processing
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Final quality report attached to a cleaning run
#[derive(Debug, Clone, Serialize)]
pub struct QaReport {
    pub quality_score: u8,
    pub issues: Vec<String>,
    pub content_loss_detected: bool,
}

impl From<QaAssessment> for QaReport {
    fn from(assessment: QaAssessment) -> Self {
        Self {
            quality_score: assessment.quality_score,
            issues: assessment.issues_found,
            content_loss_detected: assessment.content_loss_detected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_defaults() {
        let assessment: QaAssessment = serde_json::from_str("{}").unwrap();

        assert_eq!(assessment.quality_score, 0);
        assert!(assessment.issues_found.is_empty());
        assert!(!assessment.content_loss_detected);
    }

    #[test]
    fn test_report_drops_recommendations() {
        let assessment: QaAssessment = serde_json::from_str(
            r#"{
                "quality_score": 85,
                "issues_found": ["speaker 3 unnamed"],
                "content_loss_detected": true,
                "recommendations": ["re-run with larger chunks"]
            }"#,
        )
        .unwrap();

        let report = QaReport::from(assessment);

        assert_eq!(report.quality_score, 85);
        assert_eq!(report.issues, vec!["speaker 3 unnamed"]);
        assert!(report.content_loss_detected);
    }
}
