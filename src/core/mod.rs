// src/core/mod.rs
//! Configuration and the HTTP client shared by every page

pub mod config_manager;
pub mod service_client;

pub use config_manager::{ClientConfig, ConfigManager};
pub use service_client::{ResumeApi, ResumeUpload, ServiceClient};
