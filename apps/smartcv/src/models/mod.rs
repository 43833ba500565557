pub mod cv;
pub mod job;

use thiserror::Error;

/// Rejected field values when constructing a CV or a job description.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Name cannot be blank")]
    BlankName,

    #[error("Invalid email format: '{0}'")]
    InvalidEmail(String),

    #[error("Job title cannot be blank")]
    BlankTitle,

    #[error("Invalid experience range: max {max} is below min {min}")]
    InvalidExperienceRange { min: u32, max: u32 },
}

/// Trims and lowercases a skill name. Returns `None` for blank input.
pub fn normalize_skill(skill: &str) -> Option<String> {
    let trimmed = skill.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_skill_trims_and_lowercases() {
        assert_eq!(normalize_skill("  Java "), Some("java".to_string()));
        assert_eq!(normalize_skill("C#"), Some("c#".to_string()));
    }

    #[test]
    fn test_normalize_skill_blank_is_none() {
        assert_eq!(normalize_skill("   "), None);
        assert_eq!(normalize_skill(""), None);
    }
}
