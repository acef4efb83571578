// src/types/mod.rs
pub mod analysis;
pub mod builder;
pub mod feedback;
pub mod jobs;

pub use analysis::{AnalysisOutcome, AnalysisReport, CandidateInfo, JobContext, ReportRequest};
pub use builder::{EducationItem, ExperienceItem, ProjectItem, ResumeData};
pub use feedback::{FeedbackAck, FeedbackForm};
pub use jobs::{ExperienceLevel, JobListing, JobQuery};
