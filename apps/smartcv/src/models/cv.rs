use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{normalize_skill, ValidationError};

/// ASCII-only: accented local parts and domains are rejected.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-.]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$").expect("email pattern compiles")
});

static FIRST_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("number pattern compiles"));

/// A single education entry on a CV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_year: i32,
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} ({}, {})",
            self.degree, self.field, self.institution, self.graduation_year
        )
    }
}

/// A validated candidate CV.
///
/// Skills are stored normalized (trimmed, lowercase, unique) and iterate in
/// sorted order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cv {
    id: Uuid,
    name: String,
    email: String,
    skills: BTreeSet<String>,
    years_experience: u32,
    education: Vec<Education>,
}

impl Cv {
    pub fn new<I, S>(
        name: &str,
        email: &str,
        skills: I,
        years_experience: u32,
        education: Vec<Education>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankName);
        }

        let email = email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        let skills = skills
            .into_iter()
            .filter_map(|s| normalize_skill(s.as_ref()))
            .collect();

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_lowercase(),
            skills,
            years_experience,
            education,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn years_experience(&self) -> u32 {
        self.years_experience
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    /// Case- and whitespace-insensitive skill lookup. Blank input never matches.
    pub fn has_skill(&self, skill: &str) -> bool {
        normalize_skill(skill).is_some_and(|s| self.skills.contains(&s))
    }

    /// Required skills this candidate lacks.
    pub fn missing_skills<'a, I>(&self, required: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        required
            .into_iter()
            .filter(|skill| !self.has_skill(skill))
            .cloned()
            .collect()
    }

    /// Required skills this candidate has.
    pub fn matched_skills<'a, I>(&self, required: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        required
            .into_iter()
            .filter(|skill| self.has_skill(skill))
            .cloned()
            .collect()
    }

    /// Comma-joined degree names, e.g. "Bachelor's, Master's".
    pub fn degree_summary(&self) -> String {
        self.education
            .iter()
            .map(|e| e.degree.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Extracts the first number from free text such as "7 years". Returns 0 when
/// there is none or it does not fit a `u32`.
pub fn parse_experience_years(text: &str) -> u32 {
    FIRST_NUMBER_RE
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
