//! Client for the resume analysis service.
//!
//! The [`normalizer`] turns any analysis payload the service returns into one
//! record. The [`pages`] drive the four user flows against a [`core::ResumeApi`]
//! and [`render`] formats their results for the terminal.

pub mod cli;
pub mod core;
pub mod normalizer;
pub mod pages;
pub mod render;
pub mod types;
pub mod utils;

pub use crate::core::{ClientConfig, ConfigManager, ResumeApi, ServiceClient};
pub use crate::normalizer::normalize;
pub use crate::types::{AnalysisOutcome, AnalysisReport};
