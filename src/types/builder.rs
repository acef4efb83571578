// src/types/builder.rs
//! Resume-builder form state, serialized as the `/builder/generate` request body

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::get_file_extension;

// ===== Builder Form =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub summary: String,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    /// Comma-separated, sent as typed
    pub skills: String,
    pub projects: Vec<ProjectItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String, // blank means current
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationItem {
    pub school: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectItem {
    pub name: String,
    pub description: String,
}

impl ResumeData {
    /// Load a builder form from a TOML, YAML or JSON file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume form: {}", path.display()))?;

        let file_name = path.to_string_lossy();
        match get_file_extension(&file_name).as_deref() {
            Some("toml") => toml::from_str(&content).context("Failed to parse TOML resume form"),
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).context("Failed to parse YAML resume form")
            }
            Some("json") => {
                serde_json::from_str(&content).context("Failed to parse JSON resume form")
            }
            _ => anyhow::bail!(
                "Unsupported resume form format: {}. Use .toml, .yaml or .json",
                path.display()
            ),
        }
    }

    /// Skills split on commas, blanks dropped
    pub fn skill_list(&self) -> Vec<&str> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_serializes_with_builder_field_names() {
        let data = ResumeData {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            experience: vec![ExperienceItem {
                title: "Analyst".to_string(),
                company: "Engines Ltd".to_string(),
                start_date: "1842".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["fullName"], "Ada Lovelace");
        assert_eq!(value["experience"][0]["startDate"], "1842");
        assert_eq!(value["experience"][0]["endDate"], "");
        assert_eq!(value["projects"], serde_json::json!([]));
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
fullName = "Grace Hopper"
email = "grace@example.com"
skills = "COBOL, compilers,  "

[[education]]
school = "Yale"
degree = "PhD"
year = "1934"
"#
        )
        .unwrap();

        let data = ResumeData::from_file(file.path()).unwrap();
        assert_eq!(data.full_name, "Grace Hopper");
        assert_eq!(data.education.len(), 1);
        assert_eq!(data.education[0].school, "Yale");
        assert_eq!(data.skill_list(), vec!["COBOL", "compilers"]);
    }

    #[test]
    fn test_from_json_file_with_missing_fields() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"fullName": "Linus", "projects": [{{"name": "kernel"}}]}}"#).unwrap();

        let data = ResumeData::from_file(file.path()).unwrap();
        assert_eq!(data.full_name, "Linus");
        assert!(data.email.is_empty());
        assert_eq!(data.projects[0].name, "kernel");
        assert!(data.projects[0].description.is_empty());
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(ResumeData::from_file(file.path()).is_err());
    }
}
