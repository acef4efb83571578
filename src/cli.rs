// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::core::{ConfigManager, ServiceClient};
use crate::pages::analyzer::ROLE_CATALOG;
use crate::pages::{AnalyzerPage, BuilderPage, FeedbackPage, JobSearchPage, PageStatus};
use crate::render;
use crate::types::{ExperienceLevel, FeedbackForm, ResumeData};
use crate::utils::{report_file_name, write_output};

#[derive(Parser)]
#[command(name = "resume-portal")]
#[command(about = "Analyze resumes, build resume PDFs, search jobs and send feedback")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./config.yaml when present)
    #[arg(long, global = true, env = "RESUME_PORTAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the resume API, overrides config and environment
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory for downloaded PDFs
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a resume against a job role
    Analyze {
        /// Resume file (.pdf or .docx)
        file: PathBuf,
        /// Job description text
        #[arg(long, default_value = "")]
        job_description: String,
        /// Read the job description from a file instead
        #[arg(long, conflicts_with = "job_description")]
        job_description_file: Option<PathBuf>,
        /// Job category from the role catalog
        #[arg(long)]
        category: Option<String>,
        /// Target role; defaults to the category's first role
        #[arg(long)]
        role: Option<String>,
        /// Print the normalized record as JSON
        #[arg(long)]
        json: bool,
        /// Also download the PDF analysis report
        #[arg(long)]
        report: bool,
    },
    /// Generate a resume PDF from a TOML, YAML or JSON form
    Build {
        form: PathBuf,
        /// Print the form step by step before generating
        #[arg(long)]
        preview: bool,
    },
    /// Search job portals
    Jobs {
        title: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value_t = ExperienceLevel::All)]
        experience: ExperienceLevel,
        /// Write results as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Send or list product feedback
    Feedback {
        #[command(subcommand)]
        action: FeedbackAction,
    },
    /// List job categories and their roles
    Roles,
}

#[derive(Subcommand)]
pub enum FeedbackAction {
    /// Submit feedback
    Submit {
        #[arg(long, default_value_t = 5)]
        rating: u8,
        #[arg(long, default_value_t = 5)]
        usability: u8,
        #[arg(long, default_value_t = 5)]
        features: u8,
        #[arg(long, default_value = "")]
        missing_features: String,
        #[arg(long, default_value = "")]
        suggestions: String,
        #[arg(long, default_value = "")]
        experience: String,
    },
    /// List submitted feedback
    List,
}

/// Ready value, or the page's message as an error
fn settled<T>(status: &PageStatus<T>) -> Result<&T> {
    match status {
        PageStatus::Ready(value) => Ok(value),
        PageStatus::Failed(message) => anyhow::bail!("{}", message),
        PageStatus::Idle | PageStatus::Loading => anyhow::bail!("Request did not complete"),
    }
}

pub async fn handle_command(command: Command, config: ConfigManager) -> Result<()> {
    let client = ServiceClient::new(&config.client)?;
    let output_dir = config.client.output_dir.clone();
    info!("Using resume API at {}", client.base_url());

    match command {
        Command::Analyze {
            file,
            job_description,
            job_description_file,
            category,
            role,
            json,
            report,
        } => {
            let mut page = AnalyzerPage::new();
            page.select_file(file);
            page.job_description = match job_description_file {
                Some(path) => std::fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read job description: {}", path.display())
                })?,
                None => job_description,
            };
            if let Some(category) = category {
                page.select_category(&category)?;
            }
            if let Some(role) = role {
                page.select_role(&role)?;
            }

            page.submit(&client).await?;
            let view = settled(page.status())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&view.outcome)?);
            } else {
                print!("{}", render::analysis_panel(&view.outcome, &view.job_role));
            }

            if report {
                page.download_report(&client).await?;
                let pdf = settled(page.report())?;
                let candidate = page
                    .report_request()
                    .map(|request| request.candidate_name)
                    .unwrap_or_default();
                let path = write_output(&output_dir, &report_file_name(&candidate), pdf).await?;
                println!("Report saved to {}", path.display());
            }
        }

        Command::Build { form, preview } => {
            let mut page = BuilderPage::from_form(ResumeData::from_file(&form)?);
            if preview {
                print!("{}", render::builder_summary(&page.form));
            }

            page.generate(&client).await?;
            let generated = settled(page.status())?;
            let path = write_output(&output_dir, &generated.file_name, &generated.content).await?;
            println!("Resume saved to {}", path.display());
        }

        Command::Jobs {
            title,
            location,
            experience,
            csv,
        } => {
            let mut page = JobSearchPage::with_query(&title, &location, experience);
            page.search(&client).await?;
            let listings = settled(page.status())?;

            if !page.is_empty_result() {
                println!(
                    "{} results for {} ({})\n",
                    listings.len(),
                    page.query.title.trim(),
                    page.query.experience.label()
                );
            }
            print!("{}", render::job_listings(listings, page.display_location()));

            if let Some(path) = csv {
                let file = std::fs::File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                render::write_jobs_csv(listings, file)?;
                println!("Wrote {} listings to {}", listings.len(), path.display());
            }
        }

        Command::Feedback { action } => match action {
            FeedbackAction::Submit {
                rating,
                usability,
                features,
                missing_features,
                suggestions,
                experience,
            } => {
                let mut page = FeedbackPage::from_form(FeedbackForm {
                    rating,
                    usability_score: usability,
                    feature_satisfaction: features,
                    missing_features,
                    improvement_suggestions: suggestions,
                    user_experience: experience,
                });
                page.submit(&client).await?;
                let ack = settled(page.status())?;

                if ack.message.is_empty() {
                    println!("Thank you for your feedback!");
                } else {
                    println!("{}", ack.message);
                }
            }
            FeedbackAction::List => {
                let entries = client.list_feedback().await?;
                print!("{}", render::feedback_entries(&entries));
            }
        },

        Command::Roles => {
            for (category, roles) in ROLE_CATALOG {
                println!("{}", category);
                for role in roles.iter() {
                    println!("  {}", role);
                }
            }
        }
    }

    Ok(())
}
