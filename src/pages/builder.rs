// src/pages/builder.rs
//! Multi-step resume builder

use tracing::info;

use super::{FormError, PageStatus};
use crate::core::ResumeApi;
use crate::types::{EducationItem, ExperienceItem, ProjectItem, ResumeData};
use crate::utils::resume_file_name;

pub const GENERATE_FAILED: &str = "Failed to generate resume. Please check your inputs.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuilderStep {
    #[default]
    Personal,
    Experience,
    Education,
    SkillsProjects,
}

impl BuilderStep {
    pub const ALL: [BuilderStep; 4] = [
        Self::Personal,
        Self::Experience,
        Self::Education,
        Self::SkillsProjects,
    ];

    /// 1-based position shown to the user
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|step| step == self).unwrap_or(0) + 1
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Experience => "Work Experience",
            Self::Education => "Education",
            Self::SkillsProjects => "Skills & Projects",
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL
            .get(self.number())
            .copied()
            .unwrap_or(Self::SkillsProjects)
    }

    pub fn previous(&self) -> Self {
        self.number()
            .checked_sub(2)
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or(Self::Personal)
    }

    pub fn is_last(&self) -> bool {
        *self == Self::SkillsProjects
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedResume {
    pub file_name: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct BuilderPage {
    pub form: ResumeData,
    step: BuilderStep,
    status: PageStatus<GeneratedResume>,
}

impl BuilderPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_form(form: ResumeData) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn step(&self) -> BuilderStep {
        self.step
    }

    pub fn status(&self) -> &PageStatus<GeneratedResume> {
        &self.status
    }

    pub fn next_step(&mut self) -> BuilderStep {
        self.step = self.step.next();
        self.step
    }

    pub fn previous_step(&mut self) -> BuilderStep {
        self.step = self.step.previous();
        self.step
    }

    // Entries are added blank and edited in place by index

    pub fn add_experience(&mut self) -> usize {
        self.form.experience.push(ExperienceItem::default());
        self.form.experience.len() - 1
    }

    pub fn experience_mut(&mut self, index: usize) -> Option<&mut ExperienceItem> {
        self.form.experience.get_mut(index)
    }

    pub fn remove_experience(&mut self, index: usize) -> Option<ExperienceItem> {
        (index < self.form.experience.len()).then(|| self.form.experience.remove(index))
    }

    pub fn add_education(&mut self) -> usize {
        self.form.education.push(EducationItem::default());
        self.form.education.len() - 1
    }

    pub fn education_mut(&mut self, index: usize) -> Option<&mut EducationItem> {
        self.form.education.get_mut(index)
    }

    pub fn remove_education(&mut self, index: usize) -> Option<EducationItem> {
        (index < self.form.education.len()).then(|| self.form.education.remove(index))
    }

    pub fn add_project(&mut self) -> usize {
        self.form.projects.push(ProjectItem::default());
        self.form.projects.len() - 1
    }

    pub fn project_mut(&mut self, index: usize) -> Option<&mut ProjectItem> {
        self.form.projects.get_mut(index)
    }

    pub fn remove_project(&mut self, index: usize) -> Option<ProjectItem> {
        (index < self.form.projects.len()).then(|| self.form.projects.remove(index))
    }

    fn validate(&self) -> Result<(), FormError> {
        if self.form.full_name.trim().is_empty() {
            return Err(FormError::Required("Full name"));
        }
        if self.form.email.trim().is_empty() {
            return Err(FormError::Required("Email"));
        }
        Ok(())
    }

    /// Send the whole form and keep the returned PDF under its download name
    pub async fn generate<A: ResumeApi>(&mut self, api: &A) -> Result<(), FormError> {
        self.validate()?;

        let file_name = resume_file_name(&self.form.full_name);
        info!("Generating resume PDF {}", file_name);
        self.status = PageStatus::Loading;

        let result = api
            .generate_resume(&self.form)
            .await
            .map(|content| GeneratedResume { file_name, content });
        self.status = PageStatus::settle(result, GENERATE_FAILED);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fake::FakeApi;

    fn filled_page() -> BuilderPage {
        let mut page = BuilderPage::new();
        page.form.full_name = "Ada  Lovelace".to_string();
        page.form.email = "ada@example.com".to_string();
        page
    }

    #[test]
    fn test_steps_are_clamped() {
        let mut page = BuilderPage::new();
        assert_eq!(page.step().number(), 1);
        assert_eq!(page.previous_step(), BuilderStep::Personal);

        assert_eq!(page.next_step(), BuilderStep::Experience);
        assert_eq!(page.next_step(), BuilderStep::Education);
        assert_eq!(page.next_step(), BuilderStep::SkillsProjects);
        assert_eq!(page.next_step(), BuilderStep::SkillsProjects);
        assert!(page.step().is_last());
        assert_eq!(page.step().number(), 4);

        assert_eq!(page.previous_step(), BuilderStep::Education);
    }

    #[test]
    fn test_entries_add_edit_remove() {
        let mut page = BuilderPage::new();
        let first = page.add_experience();
        let second = page.add_experience();
        page.experience_mut(first).unwrap().title = "Engineer".to_string();
        page.experience_mut(second).unwrap().company = "Acme".to_string();

        let removed = page.remove_experience(first).unwrap();
        assert_eq!(removed.title, "Engineer");
        assert_eq!(page.form.experience.len(), 1);
        assert_eq!(page.form.experience[0].company, "Acme");

        assert!(page.remove_experience(5).is_none());
        assert!(page.experience_mut(5).is_none());

        let edu = page.add_education();
        page.education_mut(edu).unwrap().school = "MIT".to_string();
        let project = page.add_project();
        page.project_mut(project).unwrap().name = "Compiler".to_string();
        assert_eq!(page.remove_project(project).unwrap().name, "Compiler");
        assert!(page.form.projects.is_empty());
        assert_eq!(page.form.education[0].school, "MIT");
    }

    #[tokio::test]
    async fn test_validation_blocks_generation() {
        let api = FakeApi::default();
        let mut page = BuilderPage::new();
        assert_eq!(page.generate(&api).await, Err(FormError::Required("Full name")));

        page.form.full_name = "Ada".to_string();
        assert_eq!(page.generate(&api).await, Err(FormError::Required("Email")));
        assert!(api.resumes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generation_names_download() {
        let api = FakeApi {
            pdf: Some(b"%PDF-1.7".to_vec()),
            ..Default::default()
        };
        let mut page = filled_page();

        page.generate(&api).await.unwrap();

        let generated = page.status().value().unwrap();
        assert_eq!(generated.file_name, "Ada_Lovelace_Resume.pdf");
        assert_eq!(generated.content, b"%PDF-1.7");
        assert_eq!(api.resumes.lock().unwrap()[0].email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_generation_failure_message() {
        let api = FakeApi::default();
        let mut page = filled_page();

        page.generate(&api).await.unwrap();
        assert_eq!(page.status().error(), Some(GENERATE_FAILED));
    }
}
