// src/types/jobs.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Experience filter accepted by `/jobs/search`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "fresher")]
    Fresher,
    #[serde(rename = "0-1")]
    UpToOne,
    #[serde(rename = "1-3")]
    OneToThree,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "5-7")]
    FiveToSeven,
    #[serde(rename = "7+")]
    SevenPlus,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 7] = [
        Self::All,
        Self::Fresher,
        Self::UpToOne,
        Self::OneToThree,
        Self::ThreeToFive,
        Self::FiveToSeven,
        Self::SevenPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Fresher => "fresher",
            Self::UpToOne => "0-1",
            Self::OneToThree => "1-3",
            Self::ThreeToFive => "3-5",
            Self::FiveToSeven => "5-7",
            Self::SevenPlus => "7+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Levels",
            Self::Fresher => "Fresher",
            Self::UpToOne => "0-1 Years",
            Self::OneToThree => "1-3 Years",
            Self::ThreeToFive => "3-5 Years",
            Self::FiveToSeven => "5-7 Years",
            Self::SevenPlus => "7+ Years",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| {
                let accepted: Vec<&str> = Self::ALL.iter().map(|l| l.as_str()).collect();
                format!(
                    "Unknown experience level: {}. Use one of: {}",
                    s,
                    accepted.join(", ")
                )
            })
    }
}

/// Query parameters for `/jobs/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobQuery {
    pub title: String,
    pub location: String,
    pub experience: ExperienceLevel,
}

/// One listing returned by the job aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub portal: String,
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_level_parsing() {
        assert_eq!("all".parse::<ExperienceLevel>(), Ok(ExperienceLevel::All));
        assert_eq!("7+".parse::<ExperienceLevel>(), Ok(ExperienceLevel::SevenPlus));
        assert_eq!(" Fresher ".parse::<ExperienceLevel>(), Ok(ExperienceLevel::Fresher));
        assert!("10+".parse::<ExperienceLevel>().is_err());
    }

    #[test]
    fn test_query_serializes_experience_as_wire_value() {
        let query = JobQuery {
            title: "Rust Developer".to_string(),
            location: "Pune".to_string(),
            experience: ExperienceLevel::OneToThree,
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["experience"], "1-3");
    }
}
