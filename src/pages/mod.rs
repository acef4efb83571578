// src/pages/mod.rs
//! Page flows: collect input, issue one request, keep the outcome in view state
//!
//! Every page moves through `Idle -> Loading -> (Ready | Failed)`. Client-side
//! validation failures are returned as [`FormError`] before any request is
//! sent. Upstream failures are logged and replaced by a generic message.

use std::fmt::Display;
use thiserror::Error;
use tracing::error;

pub mod analyzer;
pub mod builder;
pub mod feedback;
pub mod job_search;

pub use analyzer::{AnalysisView, AnalyzerPage};
pub use builder::{BuilderPage, BuilderStep, GeneratedResume};
pub use feedback::FeedbackPage;
pub use job_search::JobSearchPage;

#[derive(Debug, Clone, PartialEq)]
pub enum PageStatus<T> {
    Idle,
    /// Held only while a request is awaited; the flow holds `&mut self`
    /// meanwhile, so callers observe `Idle`, `Ready` or `Failed` afterwards
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for PageStatus<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> PageStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Outcome of one request; failures keep only `message` for display
    pub(crate) fn settle<E: Display>(result: Result<T, E>, message: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => {
                error!("{}: {:#}", message, e);
                Self::Failed(message.to_string())
            }
        }
    }
}

/// Client-side validation failures, shown inline
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Please upload a resume file.")]
    MissingFile,

    #[error("Unsupported resume file {0}. Upload a PDF or DOCX file.")]
    UnsupportedFile(String),

    #[error("Could not read {path}: {reason}")]
    UnreadableFile { path: String, reason: String },

    #[error("{0} is required.")]
    Required(&'static str),

    #[error("{field} must be between {min} and {max}, got {value}.")]
    OutOfRange {
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("Unknown job category: {0}")]
    UnknownCategory(String),

    #[error("Run an analysis before downloading a report.")]
    NoAnalysis,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_keeps_only_generic_message() {
        let status: PageStatus<u8> =
            PageStatus::settle(Err(anyhow::anyhow!("connection refused")), "Try again.");
        assert_eq!(status.error(), Some("Try again."));
        assert!(status.value().is_none());

        let status = PageStatus::settle(Ok::<_, anyhow::Error>(7), "Try again.");
        assert_eq!(status.value(), Some(&7));
        assert!(!status.is_loading());
        assert!(PageStatus::<u8>::Loading.is_loading());
        assert_eq!(PageStatus::<u8>::default(), PageStatus::Idle);
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::MissingFile.to_string(), "Please upload a resume file.");
        assert_eq!(FormError::Required("Job title").to_string(), "Job title is required.");
    }
}
