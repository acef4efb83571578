// src/pages/analyzer.rs
//! Upload-and-analyze flow

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{FormError, PageStatus};
use crate::core::{ResumeApi, ResumeUpload};
use crate::normalizer::normalize;
use crate::types::{AnalysisOutcome, ReportRequest};
use crate::utils::{validate_file_extension, RESUME_EXTENSIONS};

pub const ANALYSIS_FAILED: &str = "Analysis failed. Please try again.";
pub const REPORT_FAILED: &str = "Failed to download report. Please try again.";

const DEFAULT_CANDIDATE: &str = "Candidate";

/// Job categories and their roles, first role is the category default
pub const ROLE_CATALOG: &[(&str, &[&str])] = &[
    (
        "Software Engineering",
        &[
            "Frontend Developer",
            "Backend Developer",
            "Full Stack Developer",
            "Mobile Developer",
            "DevOps Engineer",
            "Software Architect",
            "QA Engineer",
        ],
    ),
    (
        "Data Science & Analytics",
        &[
            "Data Scientist",
            "Data Analyst",
            "Machine Learning Engineer",
            "Business Intelligence Analyst",
            "Data Engineer",
        ],
    ),
    (
        "Product & Design",
        &[
            "Product Manager",
            "UI/UX Designer",
            "Graphic Designer",
            "Product Designer",
        ],
    ),
    (
        "Marketing",
        &[
            "Digital Marketer",
            "Content Strategist",
            "SEO Specialist",
            "Social Media Manager",
        ],
    ),
    (
        "Sales & Business",
        &[
            "Sales Representative",
            "Business Development Manager",
            "Account Executive",
        ],
    ),
    ("Other", &["Other"]),
];

/// Roles for a category, matched case-insensitively
pub fn roles_for(category: &str) -> Option<(&'static str, &'static [&'static str])> {
    ROLE_CATALOG
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category.trim()))
        .copied()
}

/// Response of one analysis, kept raw for the report download
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub raw: Value,
    pub outcome: AnalysisOutcome,
    /// Role the analysis was requested for
    pub job_role: String,
}

#[derive(Debug)]
pub struct AnalyzerPage {
    file: Option<PathBuf>,
    pub job_description: String,
    category: &'static str,
    job_role: String,
    status: PageStatus<AnalysisView>,
    report: PageStatus<Vec<u8>>,
}

impl Default for AnalyzerPage {
    fn default() -> Self {
        let (category, roles) = ROLE_CATALOG[0];
        Self {
            file: None,
            job_description: String::new(),
            category,
            job_role: roles[0].to_string(),
            status: PageStatus::Idle,
            report: PageStatus::Idle,
        }
    }
}

impl AnalyzerPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn job_role(&self) -> &str {
        &self.job_role
    }

    pub fn status(&self) -> &PageStatus<AnalysisView> {
        &self.status
    }

    pub fn report(&self) -> &PageStatus<Vec<u8>> {
        &self.report
    }

    /// Choosing a file clears a previous failure
    pub fn select_file(&mut self, path: impl Into<PathBuf>) {
        self.file = Some(path.into());
        if self.status.error().is_some() {
            self.status = PageStatus::Idle;
        }
    }

    /// Switch category and reset the role to its first entry
    pub fn select_category(&mut self, category: &str) -> Result<(), FormError> {
        let (name, roles) =
            roles_for(category).ok_or_else(|| FormError::UnknownCategory(category.to_string()))?;
        self.category = name;
        self.job_role = roles[0].to_string();
        Ok(())
    }

    /// Any role is accepted, catalog or free text
    pub fn select_role(&mut self, role: &str) -> Result<(), FormError> {
        let role = role.trim();
        if role.is_empty() {
            return Err(FormError::Required("Job role"));
        }
        self.job_role = role.to_string();
        Ok(())
    }

    async fn prepare_upload(&self) -> Result<ResumeUpload, FormError> {
        let path = self.file.as_ref().ok_or(FormError::MissingFile)?;
        // Lossy so a non-UTF-8 name still uploads; the bytes are read from `path`
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or(FormError::MissingFile)?;

        validate_file_extension(&file_name, RESUME_EXTENSIONS)
            .map_err(|_| FormError::UnsupportedFile(file_name.clone()))?;

        let content = tokio::fs::read(path)
            .await
            .map_err(|e| FormError::UnreadableFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(ResumeUpload {
            file_name,
            content,
            job_description: self.job_description.clone(),
            job_role: self.job_role.clone(),
        })
    }

    /// Upload the selected resume and normalize whatever comes back
    pub async fn submit<A: ResumeApi>(&mut self, api: &A) -> Result<(), FormError> {
        let upload = self.prepare_upload().await?;

        info!(
            "Submitting {} for analysis as {}",
            upload.file_name, upload.job_role
        );
        self.status = PageStatus::Loading;
        self.report = PageStatus::Idle;

        let result = api.analyze_resume(&upload).await.map(|raw| AnalysisView {
            outcome: normalize(Some(&raw)),
            raw,
            job_role: upload.job_role.clone(),
        });
        self.status = PageStatus::settle(result, ANALYSIS_FAILED);

        Ok(())
    }

    /// Body for the report download, once an analysis has succeeded
    pub fn report_request(&self) -> Option<ReportRequest> {
        let view = self.status.value()?;

        let candidate_name = view
            .outcome
            .report()
            .and_then(|report| report.candidate_info.as_ref())
            .and_then(|info| info.name.clone())
            .unwrap_or_else(|| DEFAULT_CANDIDATE.to_string());

        let analysis_result = view
            .raw
            .get("ai_analysis")
            .cloned()
            .unwrap_or_else(|| view.raw.clone());

        Some(ReportRequest {
            candidate_name,
            job_role: view.job_role.clone(),
            analysis_result,
        })
    }

    pub async fn download_report<A: ResumeApi>(&mut self, api: &A) -> Result<(), FormError> {
        let request = self.report_request().ok_or(FormError::NoAnalysis)?;

        self.report = PageStatus::Loading;
        self.report = PageStatus::settle(api.download_report(&request).await, REPORT_FAILED);

        Ok(())
    }
}
