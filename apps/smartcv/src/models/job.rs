use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{normalize_skill, ValidationError};

/// Accepted years of experience. `max_years = None` means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceRange {
    min_years: u32,
    max_years: Option<u32>,
}

impl ExperienceRange {
    pub fn new(min_years: u32, max_years: Option<u32>) -> Result<Self, ValidationError> {
        if let Some(max) = max_years {
            if max < min_years {
                return Err(ValidationError::InvalidExperienceRange {
                    min: min_years,
                    max,
                });
            }
        }
        Ok(Self {
            min_years,
            max_years,
        })
    }

    /// Range with a minimum and no maximum.
    pub fn at_least(min_years: u32) -> Self {
        Self {
            min_years,
            max_years: None,
        }
    }

    pub fn min_years(&self) -> u32 {
        self.min_years
    }

    pub fn max_years(&self) -> Option<u32> {
        self.max_years
    }

    pub fn matches(&self, years: u32) -> bool {
        years >= self.min_years && self.max_years.map_or(true, |max| years <= max)
    }
}

/// Required degree, e.g. ("Master's", "Computer Science"). An empty field
/// accepts any field of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeRequirement {
    pub degree_type: String,
    #[serde(default)]
    pub field: String,
}

impl DegreeRequirement {
    pub fn new(degree_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            degree_type: degree_type.into().trim().to_string(),
            field: field.into().trim().to_string(),
        }
    }
}

/// An immutable job description that candidates are ranked against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDescription {
    title: String,
    required_skills: BTreeSet<String>,
    required_experience: ExperienceRange,
    required_education: Vec<DegreeRequirement>,
}

impl JobDescription {
    pub fn new<I, S>(
        title: &str,
        required_skills: I,
        required_experience: ExperienceRange,
        required_education: Vec<DegreeRequirement>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::BlankTitle);
        }

        Ok(Self {
            title: title.to_string(),
            required_skills: required_skills
                .into_iter()
                .filter_map(|s| normalize_skill(s.as_ref()))
                .collect(),
            required_experience,
            required_education,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn required_skills(&self) -> &BTreeSet<String> {
        &self.required_skills
    }

    pub fn required_experience(&self) -> ExperienceRange {
        self.required_experience
    }

    pub fn required_education(&self) -> &[DegreeRequirement] {
        &self.required_education
    }
}
