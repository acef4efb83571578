// src/pages/job_search.rs
use tracing::info;

use super::{FormError, PageStatus};
use crate::core::ResumeApi;
use crate::types::{ExperienceLevel, JobListing, JobQuery};

pub const SEARCH_FAILED: &str = "Failed to search jobs. Please try again.";
pub const NO_JOBS_FOUND: &str = "No jobs found. Try adjusting your search criteria.";
pub const DEFAULT_LOCATION: &str = "India";

#[derive(Debug, Default)]
pub struct JobSearchPage {
    pub query: JobQuery,
    searched: bool,
    status: PageStatus<Vec<JobListing>>,
}

impl JobSearchPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(title: &str, location: &str, experience: ExperienceLevel) -> Self {
        Self {
            query: JobQuery {
                title: title.to_string(),
                location: location.to_string(),
                experience,
            },
            ..Self::default()
        }
    }

    pub fn status(&self) -> &PageStatus<Vec<JobListing>> {
        &self.status
    }

    /// True once a search has been issued
    pub fn searched(&self) -> bool {
        self.searched
    }

    /// Location shown on each listing card
    pub fn display_location(&self) -> &str {
        let location = self.query.location.trim();
        if location.is_empty() {
            DEFAULT_LOCATION
        } else {
            location
        }
    }

    /// Search completed without error and returned nothing
    pub fn is_empty_result(&self) -> bool {
        self.searched && self.status.value().is_some_and(|jobs| jobs.is_empty())
    }

    pub async fn search<A: ResumeApi>(&mut self, api: &A) -> Result<(), FormError> {
        if self.query.title.trim().is_empty() {
            return Err(FormError::Required("Job title"));
        }

        let query = JobQuery {
            title: self.query.title.trim().to_string(),
            location: self.query.location.trim().to_string(),
            experience: self.query.experience,
        };
        info!(
            "Searching jobs: {} in {} ({})",
            query.title, query.location, query.experience
        );

        self.searched = true;
        self.status = PageStatus::Loading;
        self.status = PageStatus::settle(api.search_jobs(&query).await, SEARCH_FAILED);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fake::FakeApi;

    fn listing(portal: &str) -> JobListing {
        JobListing {
            portal: portal.to_string(),
            title: "Rust Engineer".to_string(),
            url: format!("https://{}.example.com/jobs?q=rust", portal.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_blank_title_blocks_search() {
        let api = FakeApi::default();
        let mut page = JobSearchPage::with_query("   ", "Pune", ExperienceLevel::All);

        assert_eq!(page.search(&api).await, Err(FormError::Required("Job title")));
        assert!(!page.searched());
        assert!(api.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_sends_trimmed_query() {
        let api = FakeApi {
            jobs: Some(vec![listing("LinkedIn"), listing("Naukri")]),
            ..Default::default()
        };
        let mut page =
            JobSearchPage::with_query(" Rust Engineer ", " Bengaluru", ExperienceLevel::ThreeToFive);

        page.search(&api).await.unwrap();

        let queries = api.queries.lock().unwrap();
        assert_eq!(queries[0].title, "Rust Engineer");
        assert_eq!(queries[0].location, "Bengaluru");
        assert_eq!(queries[0].experience, ExperienceLevel::ThreeToFive);
        assert_eq!(page.status().value().map(Vec::len), Some(2));
        assert!(!page.is_empty_result());
    }

    #[tokio::test]
    async fn test_empty_result_and_default_location() {
        let api = FakeApi {
            jobs: Some(Vec::new()),
            ..Default::default()
        };
        let mut page = JobSearchPage::with_query("Astronaut", "", ExperienceLevel::Fresher);
        assert!(!page.is_empty_result());

        page.search(&api).await.unwrap();
        assert!(page.is_empty_result());
        assert_eq!(page.display_location(), DEFAULT_LOCATION);
    }

    #[tokio::test]
    async fn test_failure_clears_previous_listings() {
        let ok = FakeApi {
            jobs: Some(vec![listing("Indeed")]),
            ..Default::default()
        };
        let mut page = JobSearchPage::with_query("Rust", "Delhi", ExperienceLevel::All);
        page.search(&ok).await.unwrap();

        page.search(&FakeApi::default()).await.unwrap();
        assert_eq!(page.status().error(), Some(SEARCH_FAILED));
        assert!(page.status().value().is_none());
        assert!(!page.is_empty_result());
    }
}
