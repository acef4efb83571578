// src/types/analysis.rs
//! Canonical analysis record rendered by the analyzer view

use serde::{Deserialize, Serialize};

// ===== Canonical Record =====

/// Single shape every analysis payload is reduced to.
///
/// Every member is optional: sequences default to empty, scalars to `None`.
/// Display defaults (`0`, `"N/A"`) are applied by the renderer, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub match_score: Option<f64>,
    pub match_status: Option<String>,
    pub overall_assessment: Option<String>,
    pub candidate_info: Option<CandidateInfo>,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    pub formatting_score: Option<f64>,
    #[serde(default)]
    pub formatting_issues: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub job_context: Option<JobContext>,
    pub ats_score: Option<f64>,
    #[serde(default)]
    pub ats_keywords_missing: Vec<String>,
    pub model_used: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInfo {
    pub name: Option<String>,
    pub role: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobContext {
    pub title: Option<String>,
    pub requirements_summary: Option<String>,
}

impl AnalysisReport {
    /// True when no member carries a value
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl CandidateInfo {
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl JobContext {
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

// ===== Normalization Outcome =====

/// Either a usable report or the "no structured data available" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "report", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Report(AnalysisReport),
    Empty,
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<AnalysisReport> for AnalysisOutcome {
    fn from(report: AnalysisReport) -> Self {
        if report.is_blank() {
            Self::Empty
        } else {
            Self::Report(report)
        }
    }
}

// ===== Report Download =====

/// Body of `POST /resume/report`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRequest {
    pub candidate_name: String,
    pub job_role: String,
    /// Raw analysis payload as received, not the canonical record
    pub analysis_result: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_report_becomes_empty_outcome() {
        let outcome = AnalysisOutcome::from(AnalysisReport::default());
        assert!(outcome.is_empty());
        assert!(outcome.report().is_none());
    }

    #[test]
    fn test_report_serializes_with_canonical_names() {
        let report = AnalysisReport {
            match_score: Some(72.0),
            matched_skills: vec!["SQL".to_string()],
            job_context: Some(JobContext {
                title: Some("Data Analyst".to_string()),
                requirements_summary: None,
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["matchScore"], 72.0);
        assert_eq!(value["matchedSkills"][0], "SQL");
        assert_eq!(value["missingSkills"], serde_json::json!([]));
        assert_eq!(value["jobContext"]["title"], "Data Analyst");
        assert!(value["jobContext"]["requirementsSummary"].is_null());
    }
}
