use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::cv::{parse_experience_years, Cv, Education};
use crate::parsing::{ParseError, ResumeParser};

// Label patterns only consume horizontal whitespace so a label with no value
// never captures the following line.
static NAME_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*name[ \t]*:[ \t]*(\S.*?)[ \t\r]*$").expect("name line pattern compiles")
});

/// A bare line of two or more alphabetic words, e.g. "Mary Ann O'Neil".
static BARE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z'\-]*(?:\s+[A-Za-z][A-Za-z'\-]*)+$")
        .expect("bare name pattern compiles")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9_\-.]+@(?:[A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}\b").expect("email pattern compiles")
});

static SKILLS_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*skills?[ \t]*:[ \t]*(\S.*?)[ \t\r]*$").expect("skills line pattern compiles")
});

static EXPERIENCE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*experience[ \t]*:[ \t]*(\S.*?)[ \t\r]*$")
        .expect("experience line pattern compiles")
});

static YEARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+years?").expect("years pattern compiles"));

static EDUCATION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*education[ \t]*:[ \t]*(\S.*?)[ \t\r]*$").expect("education line pattern compiles")
});

/// "<degree> in <field>, <institution> (<year>)"
static EDUCATION_ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<degree>.+?)\s+in\s+(?P<field>.+?),\s*(?P<institution>.+?)\s*\((?P<year>\d{4})\)$",
    )
    .expect("education entry pattern compiles")
});

const UNKNOWN_NAME: &str = "Unknown";

/// Parser for labelled plain-text résumés:
///
/// ```text
/// Name: Emma Johnson
/// Email: emmajohnson42@gmail.com
/// Skills: Python, Data Analysis, Machine Learning
/// Experience: 6 years
/// Education: Master's in Computer Science, University of State (2015)
/// ```
///
/// Only the email is mandatory; the other fields fall back to "Unknown",
/// no skills, 0 years and no education.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleResumeParser;

impl ResumeParser for SimpleResumeParser {
    fn parse(&self, raw_text: &str) -> Result<Cv, ParseError> {
        if raw_text.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let name = extract_name(raw_text);
        let email = EMAIL_RE
            .find(raw_text)
            .map(|m| m.as_str())
            .unwrap_or_default();
        let skills = extract_skills(raw_text);
        let years_experience = extract_years_experience(raw_text);
        let education = extract_education(raw_text);

        let cv = Cv::new(&name, email, skills, years_experience, education)?;
        debug!(
            "Parsed resume for {} ({} skills, {} years)",
            cv.name(),
            cv.skills().len(),
            cv.years_experience()
        );
        Ok(cv)
    }
}

fn extract_name(raw_text: &str) -> String {
    if let Some(caps) = NAME_LINE_RE.captures(raw_text) {
        return caps[1].to_string();
    }

    raw_text
        .lines()
        .map(str::trim)
        .find(|line| BARE_NAME_RE.is_match(line))
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}

fn extract_skills(raw_text: &str) -> Vec<String> {
    SKILLS_LINE_RE
        .captures(raw_text)
        .map(|caps| {
            caps[1]
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn extract_years_experience(raw_text: &str) -> u32 {
    if let Some(caps) = EXPERIENCE_LINE_RE.captures(raw_text) {
        return parse_experience_years(&caps[1]);
    }

    YEARS_RE
        .captures(raw_text)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

fn extract_education(raw_text: &str) -> Vec<Education> {
    EDUCATION_LINE_RE
        .captures_iter(raw_text)
        .flat_map(|caps| {
            caps[1]
                .split(';')
                .map(|s| s.trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parsed = parse_education_entry(&entry);
            if parsed.is_none() {
                debug!("Skipping unrecognised education entry: {entry}");
            }
            parsed
        })
        .collect()
}

fn parse_education_entry(entry: &str) -> Option<Education> {
    let caps = EDUCATION_ENTRY_RE.captures(entry)?;
    Some(Education {
        degree: caps["degree"].trim().to_string(),
        field: caps["field"].trim().to_string(),
        institution: caps["institution"].trim().to_string(),
        graduation_year: caps["year"].parse().ok()?,
    })
}
