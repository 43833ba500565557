//! Plain-text and JSON rendering of match results.
//!
//! Writers take any `io::Write` so the CLI can print to stdout and tests can
//! capture into a `Vec<u8>`.

use std::io::{self, Write};

use serde::Serialize;
use uuid::Uuid;

use crate::library::CandidateLibrary;
use crate::matching::{CandidateMatch, ScoreBreakdown};
use crate::models::job::{ExperienceRange, JobDescription};

const RANKING_RULE: &str = "----------------------------------------";
const REPORT_RULE: &str = "------------------------------------------------";

/// One ranked candidate in a detailed report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub rank: usize,
    pub candidate_id: Uuid,
    pub name: String,
    pub email: String,
    pub years_experience: u32,
    pub score_percent: f64,
    pub breakdown: ScoreBreakdown,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Detailed analysis of ranked candidates against one job.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub job_title: String,
    pub required_skills: Vec<String>,
    pub required_experience: ExperienceRange,
    pub entries: Vec<ReportEntry>,
}

impl AnalysisReport {
    pub fn build(matches: &[CandidateMatch], job: &JobDescription) -> Self {
        let required = job.required_skills();
        let entries = matches
            .iter()
            .enumerate()
            .map(|(i, m)| ReportEntry {
                rank: i + 1,
                candidate_id: m.candidate.id(),
                name: m.candidate.name().to_string(),
                email: m.candidate.email().to_string(),
                years_experience: m.candidate.years_experience(),
                score_percent: m.score_percent(),
                breakdown: m.breakdown,
                matched_skills: m.candidate.matched_skills(required).into_iter().collect(),
                missing_skills: m.candidate.missing_skills(required).into_iter().collect(),
            })
            .collect();

        Self {
            job_title: job.title().to_string(),
            required_skills: required.iter().cloned().collect(),
            required_experience: job.required_experience(),
            entries,
        }
    }
}

/// Compact ranking table printed after each menu search.
pub fn write_ranking<W: Write>(out: &mut W, matches: &[CandidateMatch]) -> io::Result<()> {
    writeln!(out, "\n=== Ranking Results ===")?;
    writeln!(out, "{:<20} {:<10} Match Details", "Name", "Score")?;
    writeln!(out, "{RANKING_RULE}")?;

    if matches.is_empty() {
        writeln!(out, "No candidates in the library.")?;
        return Ok(());
    }

    for m in matches {
        let cv = &m.candidate;
        writeln!(out, "{:<20} {:<10.1}%", cv.name(), m.score_percent())?;
        writeln!(out, "   Skills: {}", join(cv.skills()))?;
        writeln!(out, "   Experience: {} years", cv.years_experience())?;
        writeln!(out, "   Education: {}", cv.degree_summary())?;
        writeln!(out, "{RANKING_RULE}")?;
    }
    Ok(())
}

/// Full report: job header, then per candidate the score, contact and skill
/// coverage. Missing skills are listed only when there are any.
pub fn write_detailed_report<W: Write>(out: &mut W, report: &AnalysisReport) -> io::Result<()> {
    writeln!(out, "\n=== Detailed Analysis Report ===")?;
    writeln!(out, "Job Title: {}", report.job_title)?;
    writeln!(out, "Required Skills: {}", join(&report.required_skills))?;
    writeln!(
        out,
        "Required Experience: {}",
        describe_range(&report.required_experience)
    )?;
    writeln!(out, "{REPORT_RULE}")?;

    for entry in &report.entries {
        writeln!(
            out,
            "{}. {} (Score: {:.1}%)",
            entry.rank, entry.name, entry.score_percent
        )?;
        writeln!(out, "   Email: {}", entry.email)?;
        writeln!(out, "   Experience: {} years", entry.years_experience)?;
        writeln!(out, "   Matched Skills: [{}]", join(&entry.matched_skills))?;
        if !entry.missing_skills.is_empty() {
            writeln!(out, "   Missing Skills: [{}]", join(&entry.missing_skills))?;
        }
    }
    Ok(())
}

/// Lists every CV in the library.
pub fn write_candidates<W: Write>(out: &mut W, library: &CandidateLibrary) -> io::Result<()> {
    writeln!(out, "\n=== All Candidates ===")?;
    for cv in library.candidates() {
        let education = if cv.education().is_empty() {
            "none listed".to_string()
        } else {
            cv.education()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        };

        writeln!(out, "\nName: {}", cv.name())?;
        writeln!(out, "Email: {}", cv.email())?;
        writeln!(out, "Skills: {}", join(cv.skills()))?;
        writeln!(out, "Experience: {} years", cv.years_experience())?;
        writeln!(out, "Education: {education}")?;
    }
    Ok(())
}

fn describe_range(range: &ExperienceRange) -> String {
    match range.max_years() {
        Some(max) => format!("{}-{} years", range.min_years(), max),
        None => format!("{}+ years", range.min_years()),
    }
}

fn join<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
