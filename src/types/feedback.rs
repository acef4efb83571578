// src/types/feedback.rs
use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Body of `POST /feedback/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackForm {
    pub rating: u8,
    pub usability_score: u8,
    pub feature_satisfaction: u8,
    pub missing_features: String,
    pub improvement_suggestions: String,
    pub user_experience: String,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            rating: MAX_RATING,
            usability_score: MAX_RATING,
            feature_satisfaction: MAX_RATING,
            missing_features: String::new(),
            improvement_suggestions: String::new(),
            user_experience: String::new(),
        }
    }
}

impl FeedbackForm {
    /// Star ratings by wire name, in form order
    pub fn ratings(&self) -> [(&'static str, u8); 3] {
        [
            ("rating", self.rating),
            ("usability_score", self.usability_score),
            ("feature_satisfaction", self.feature_satisfaction),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackAck {
    #[serde(default)]
    pub message: String,
}
