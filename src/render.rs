// src/render.rs
//! Text panels for the terminal. Display defaults live here, not in the normalizer.

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;

use crate::pages::job_search::NO_JOBS_FOUND;
use crate::pages::BuilderStep;
use crate::types::{AnalysisOutcome, JobListing, ResumeData};

const NOT_AVAILABLE: &str = "N/A";
const DEFAULT_ASSESSMENT: &str = "Analysis complete.";
const NO_STRUCTURED_DATA: &str = "No structured analysis data available.";

/// Whole scores print without decimals
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}

pub fn formatting_band(score: f64) -> &'static str {
    if score >= 80.0 {
        "good"
    } else if score >= 60.0 {
        "fair"
    } else {
        "poor"
    }
}

fn push_list(out: &mut String, items: &[String], empty: &str) {
    if items.is_empty() {
        out.push_str(&format!("  {}\n", empty));
    }
    for item in items {
        out.push_str(&format!("  - {}\n", item));
    }
}

/// Results panel for one analysis; `job_role` backs up a missing job title
pub fn analysis_panel(outcome: &AnalysisOutcome, job_role: &str) -> String {
    let Some(report) = outcome.report() else {
        return format!("{}\n", NO_STRUCTURED_DATA);
    };

    let mut out = String::new();

    out.push_str(&format!(
        "Match Score: {}/100",
        format_score(report.match_score.unwrap_or(0.0))
    ));
    if let Some(status) = &report.match_status {
        out.push_str(&format!(" ({})", status));
    }
    out.push('\n');
    out.push_str(&format!(
        "{}\n\n",
        report
            .overall_assessment
            .as_deref()
            .unwrap_or(DEFAULT_ASSESSMENT)
    ));

    let candidate = report.candidate_info.clone().unwrap_or_default();
    out.push_str("Candidate\n");
    out.push_str(&format!(
        "  Name:       {}\n",
        candidate.name.as_deref().unwrap_or(NOT_AVAILABLE)
    ));
    out.push_str(&format!(
        "  Experience: {}\n",
        candidate.experience.as_deref().unwrap_or(NOT_AVAILABLE)
    ));
    out.push_str(&format!(
        "  Education:  {}\n\n",
        candidate.education.as_deref().unwrap_or(NOT_AVAILABLE)
    ));

    out.push_str("Matched Skills\n");
    push_list(&mut out, &report.matched_skills, "No specific matches found.");
    out.push_str("\nMissing Skills\n");
    push_list(&mut out, &report.missing_skills, "No critical gaps found.");

    if report.formatting_score.is_some() || !report.formatting_issues.is_empty() {
        out.push_str("\nFormatting & Structure\n");
        if let Some(score) = report.formatting_score {
            out.push_str(&format!(
                "  Presentation Score: {}/100 ({})\n",
                format_score(score),
                formatting_band(score)
            ));
        }
        push_list(
            &mut out,
            &report.formatting_issues,
            "No major formatting issues detected.",
        );
    }

    if !report.recommendations.is_empty() {
        out.push_str("\nRecommended Learning Path\n");
        for (idx, rec) in report.recommendations.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", idx + 1, rec));
        }
    }

    let context = report.job_context.clone().unwrap_or_default();
    out.push_str("\nJob Context\n");
    out.push_str(&format!(
        "  Evaluated Against: {}\n",
        context.title.as_deref().unwrap_or(job_role)
    ));
    if let Some(summary) = &context.requirements_summary {
        out.push_str(&format!("  Key Requirements:  {}\n", summary));
    }

    out.push_str(&format!(
        "\nATS Compatibility: {}/100\n",
        format_score(report.ats_score.unwrap_or(0.0))
    ));
    if !report.ats_keywords_missing.is_empty() {
        out.push_str(&format!(
            "  Missing {} keywords: {}\n",
            report.ats_keywords_missing.len(),
            report.ats_keywords_missing.join(", ")
        ));
    }

    out
}

/// Listing cards, or the empty-search hint
pub fn job_listings(listings: &[JobListing], location: &str) -> String {
    if listings.is_empty() {
        return format!("{}\n", NO_JOBS_FOUND);
    }

    let mut out = String::new();
    for job in listings {
        out.push_str(&format!("[{}] {}\n", job.portal, job.title));
        out.push_str(&format!("  Location: {}\n", location));
        out.push_str(&format!("  Apply:    {}\n\n", job.url));
    }
    out
}

pub fn write_jobs_csv<W: Write>(listings: &[JobListing], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for job in listings {
        csv_writer
            .serialize(job)
            .context("Failed to write job listing")?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Step-by-step summary of a builder form
pub fn builder_summary(form: &ResumeData) -> String {
    let mut out = String::new();

    for step in BuilderStep::ALL {
        out.push_str(&format!("Step {}: {}\n", step.number(), step.title()));
        match step {
            BuilderStep::Personal => {
                out.push_str(&format!("  {} <{}>\n", form.full_name, form.email));
                if !form.location.is_empty() {
                    out.push_str(&format!("  {}\n", form.location));
                }
            }
            BuilderStep::Experience => {
                for exp in &form.experience {
                    let end = if exp.end_date.is_empty() {
                        "Present"
                    } else {
                        exp.end_date.as_str()
                    };
                    out.push_str(&format!(
                        "  {} at {} ({} - {})\n",
                        exp.title, exp.company, exp.start_date, end
                    ));
                }
            }
            BuilderStep::Education => {
                for edu in &form.education {
                    out.push_str(&format!("  {} {} {}\n", edu.degree, edu.school, edu.year));
                }
            }
            BuilderStep::SkillsProjects => {
                out.push_str(&format!("  Skills: {}\n", form.skill_list().join(", ")));
                for project in &form.projects {
                    out.push_str(&format!("  Project: {}\n", project.name));
                }
            }
        }
    }

    out
}

/// Stored feedback entries, one line each
pub fn feedback_entries(entries: &[Value]) -> String {
    if entries.is_empty() {
        return "No feedback submitted yet.\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let field = |name: &str| {
            entry
                .get(name)
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        out.push_str(&format!(
            "rating {} | usability {} | features {} | {}\n",
            field("rating"),
            field("usability_score"),
            field("feature_satisfaction"),
            field("user_experience")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnalysisReport, CandidateInfo};

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(72.0), "72");
        assert_eq!(format_score(72.5), "72.5");
        assert_eq!(format_score(0.0), "0");
    }

    #[test]
    fn test_formatting_band() {
        assert_eq!(formatting_band(80.0), "good");
        assert_eq!(formatting_band(60.0), "fair");
        assert_eq!(formatting_band(59.9), "poor");
    }

    #[test]
    fn test_empty_outcome_panel() {
        assert_eq!(
            analysis_panel(&AnalysisOutcome::Empty, "QA Engineer"),
            "No structured analysis data available.\n"
        );
    }

    #[test]
    fn test_panel_applies_display_defaults() {
        let outcome = AnalysisOutcome::Report(AnalysisReport {
            matched_skills: vec!["SQL".to_string()],
            candidate_info: Some(CandidateInfo {
                name: Some("Ada".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        let panel = analysis_panel(&outcome, "QA Engineer");
        assert!(panel.starts_with("Match Score: 0/100\nAnalysis complete.\n"));
        assert!(panel.contains("Name:       Ada"));
        assert!(panel.contains("Experience: N/A"));
        assert!(panel.contains("  - SQL"));
        assert!(panel.contains("No critical gaps found."));
        assert!(panel.contains("Evaluated Against: QA Engineer"));
        assert!(panel.contains("ATS Compatibility: 0/100"));
        assert!(!panel.contains("Formatting & Structure"));
        assert!(!panel.contains("Recommended Learning Path"));
    }

    #[test]
    fn test_panel_formatting_section() {
        let outcome = AnalysisOutcome::Report(AnalysisReport {
            formatting_score: Some(65.0),
            ats_keywords_missing: vec!["Docker".to_string(), "AWS".to_string()],
            ..Default::default()
        });

        let panel = analysis_panel(&outcome, "DevOps Engineer");
        assert!(panel.contains("Presentation Score: 65/100 (fair)"));
        assert!(panel.contains("No major formatting issues detected."));
        assert!(panel.contains("Missing 2 keywords: Docker, AWS"));
    }

    #[test]
    fn test_job_listings_and_csv() {
        assert_eq!(job_listings(&[], "India"), format!("{}\n", NO_JOBS_FOUND));

        let listings = vec![JobListing {
            portal: "LinkedIn".to_string(),
            title: "Rust Engineer".to_string(),
            url: "https://linkedin.example.com/rust".to_string(),
        }];
        let text = job_listings(&listings, "Pune");
        assert!(text.contains("[LinkedIn] Rust Engineer"));
        assert!(text.contains("Location: Pune"));

        let mut buffer = Vec::new();
        write_jobs_csv(&listings, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(
            csv,
            "portal,title,url\nLinkedIn,Rust Engineer,https://linkedin.example.com/rust\n"
        );
    }

    #[test]
    fn test_feedback_entries() {
        let entries = vec![serde_json::json!({
            "rating": 4,
            "usability_score": 5,
            "feature_satisfaction": 3,
            "user_experience": "Smooth"
        })];
        assert_eq!(
            feedback_entries(&entries),
            "rating 4 | usability 5 | features 3 | Smooth\n"
        );
        assert_eq!(feedback_entries(&[]), "No feedback submitted yet.\n");
    }
}
