//! Built-in sample library: ten generated profiles rendered to résumé text and
//! fed through the parser, so the sample data exercises the same path as
//! user-supplied résumés.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::models::cv::Cv;
use crate::parsing::ResumeParser;

pub const MAX_SAMPLE_SIZE: usize = 10;

const FIRST_NAMES: [&str; MAX_SAMPLE_SIZE] = [
    "John", "Emma", "Michael", "Sophia", "William", "Olivia", "James", "Ava", "Robert", "Mia",
];

const LAST_NAMES: [&str; MAX_SAMPLE_SIZE] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia", "Rodriguez",
    "Wilson",
];

const SKILL_SETS: [&[&str]; MAX_SAMPLE_SIZE] = [
    &["Java", "Spring", "SQL"],
    &["Python", "Data Analysis", "Machine Learning"],
    &["JavaScript", "React", "Node.js"],
    &["C#", ".NET", "Azure"],
    &["HTML", "CSS", "JavaScript", "React"],
    &["Python", "Django", "PostgreSQL"],
    &["Java", "Hibernate", "Microservices"],
    &["Swift", "iOS Development", "Xcode"],
    &["Kotlin", "Android Development", "Firebase"],
    &["Go", "Docker", "Kubernetes"],
];

const UNIVERSITIES: [&str; 4] = ["Tech", "State", "City", "National"];

/// Generates `size` (at most ten) sample résumés and parses them.
///
/// The same `seed` always yields the same profiles; `None` seeds from entropy.
pub fn sample_candidates(
    size: usize,
    seed: Option<u64>,
    current_year: i32,
    parser: &dyn ResumeParser,
) -> Vec<Cv> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..size.min(MAX_SAMPLE_SIZE))
        .filter_map(|i| {
            let text = render_profile(i, current_year, &mut rng);
            match parser.parse(&text) {
                Ok(cv) => Some(cv),
                Err(e) => {
                    warn!("Sample profile {i} failed to parse: {e}");
                    None
                }
            }
        })
        .collect()
}

fn render_profile(index: usize, current_year: i32, rng: &mut StdRng) -> String {
    let first = FIRST_NAMES[index];
    let last = LAST_NAMES[index];
    let email = format!(
        "{}{}{}@gmail.com",
        first.to_lowercase(),
        last.to_lowercase(),
        rng.gen_range(10..100u32)
    );
    let experience: u32 = rng.gen_range(1..=10);
    let degree = if rng.gen_bool(0.5) {
        "Bachelor's"
    } else {
        "Master's"
    };
    let university = UNIVERSITIES[rng.gen_range(0..UNIVERSITIES.len())];
    let grad_year = current_year - experience as i32 - rng.gen_range(0..5);

    format!(
        "Name: {first} {last}\n\
         Email: {email}\n\
         Skills: {skills}\n\
         Experience: {experience} years\n\
         Education: {degree} in Computer Science, University of {university} ({grad_year})\n",
        skills = SKILL_SETS[index].join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::SimpleResumeParser;

    #[test]
    fn test_sample_library_has_ten_valid_profiles() {
        let cvs = sample_candidates(MAX_SAMPLE_SIZE, Some(7), 2024, &SimpleResumeParser);
        assert_eq!(cvs.len(), MAX_SAMPLE_SIZE);

        for (i, cv) in cvs.iter().enumerate() {
            assert_eq!(cv.name(), format!("{} {}", FIRST_NAMES[i], LAST_NAMES[i]));
            assert!(cv.email().ends_with("@gmail.com"));
            assert!((1..=10).contains(&cv.years_experience()));
            assert_eq!(cv.skills().len(), SKILL_SETS[i].len());
            assert_eq!(cv.education().len(), 1);
        }
    }

    #[test]
    fn test_sample_skills_keep_punctuation() {
        let cvs = sample_candidates(MAX_SAMPLE_SIZE, Some(1), 2024, &SimpleResumeParser);
        assert!(cvs[2].has_skill("node.js"));
        assert!(cvs[3].has_skill("c#"));
        assert!(cvs[3].has_skill(".net"));
    }

    #[test]
    fn test_sample_graduation_year_bounds() {
        let cvs = sample_candidates(MAX_SAMPLE_SIZE, Some(99), 2024, &SimpleResumeParser);
        for cv in &cvs {
            let edu = &cv.education()[0];
            let latest = 2024 - cv.years_experience() as i32;
            assert!(edu.graduation_year <= latest);
            assert!(edu.graduation_year > latest - 5);
            assert!(edu.degree == "Bachelor's" || edu.degree == "Master's");
            assert!(edu.institution.starts_with("University of "));
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let a = sample_candidates(MAX_SAMPLE_SIZE, Some(42), 2024, &SimpleResumeParser);
        let b = sample_candidates(MAX_SAMPLE_SIZE, Some(42), 2024, &SimpleResumeParser);
        let emails = |cvs: &[Cv]| cvs.iter().map(|c| c.email().to_string()).collect::<Vec<_>>();
        assert_eq!(emails(&a), emails(&b));
    }

    #[test]
    fn test_size_is_capped() {
        assert_eq!(
            sample_candidates(3, Some(0), 2024, &SimpleResumeParser).len(),
            3
        );
        assert_eq!(
            sample_candidates(50, Some(0), 2024, &SimpleResumeParser).len(),
            MAX_SAMPLE_SIZE
        );
    }
}
