// src/pages/feedback.rs
use tracing::info;

use super::{FormError, PageStatus};
use crate::core::ResumeApi;
use crate::types::feedback::{MAX_RATING, MIN_RATING};
use crate::types::{FeedbackAck, FeedbackForm};

pub const FEEDBACK_FAILED: &str = "Failed to submit feedback. Please try again.";

#[derive(Debug, Default)]
pub struct FeedbackPage {
    pub form: FeedbackForm,
    status: PageStatus<FeedbackAck>,
}

impl FeedbackPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_form(form: FeedbackForm) -> Self {
        Self {
            form,
            status: PageStatus::Idle,
        }
    }

    pub fn status(&self) -> &PageStatus<FeedbackAck> {
        &self.status
    }

    pub fn submitted(&self) -> bool {
        self.status.value().is_some()
    }

    fn validate(&self) -> Result<(), FormError> {
        for (field, value) in self.form.ratings() {
            if !(MIN_RATING..=MAX_RATING).contains(&value) {
                return Err(FormError::OutOfRange {
                    field,
                    value,
                    min: MIN_RATING,
                    max: MAX_RATING,
                });
            }
        }
        Ok(())
    }

    pub async fn submit<A: ResumeApi>(&mut self, api: &A) -> Result<(), FormError> {
        self.validate()?;

        info!("Submitting feedback, overall rating {}", self.form.rating);
        self.status = PageStatus::Loading;
        self.status = PageStatus::settle(api.submit_feedback(&self.form).await, FEEDBACK_FAILED);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fake::FakeApi;

    #[test]
    fn test_defaults_are_five_stars() {
        let page = FeedbackPage::new();
        assert_eq!(page.form.rating, 5);
        assert_eq!(page.form.usability_score, 5);
        assert_eq!(page.form.feature_satisfaction, 5);
        assert!(!page.submitted());
    }

    #[tokio::test]
    async fn test_rating_out_of_range_blocks_submit() {
        let api = FakeApi::default();
        let mut page = FeedbackPage::new();
        page.form.usability_score = 0;

        assert_eq!(
            page.submit(&api).await,
            Err(FormError::OutOfRange {
                field: "usability_score",
                value: 0,
                min: 1,
                max: 5
            })
        );
        assert!(api.feedback.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_success_and_failure() {
        let api = FakeApi {
            ack: Some(FeedbackAck {
                message: "Feedback submitted successfully".to_string(),
            }),
            ..Default::default()
        };
        let mut page = FeedbackPage::from_form(FeedbackForm {
            rating: 4,
            missing_features: "Cover letter builder".to_string(),
            ..Default::default()
        });

        page.submit(&api).await.unwrap();
        assert!(page.submitted());
        assert_eq!(api.feedback.lock().unwrap()[0].rating, 4);

        page.submit(&FakeApi::default()).await.unwrap();
        assert!(!page.submitted());
        assert_eq!(page.status().error(), Some(FEEDBACK_FAILED));
    }
}
