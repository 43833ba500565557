//! Weighted matching — pure-Rust, deterministic scorer.
//!
//! Algorithm:
//! 1. skills     = matched required skills / required skills (1.0 when none required)
//! 2. experience = 1.0 inside the range, 0.8 above it, else 0.5 × years / min_years
//! 3. education  = best score over the degree requirements (1.0 when none required)
//! 4. score      = 0.6 × skills + 0.3 × experience + 0.1 × education, clamped to [0, 1]
//! 5. Sort descending by score; ties keep library order.

use async_trait::async_trait;
use tracing::debug;

use crate::matching::{CandidateMatch, MatchingService, ScoreBreakdown};
use crate::models::cv::{Cv, Education};
use crate::models::job::{DegreeRequirement, JobDescription};

/// Experience score for candidates above the range maximum.
const OVERQUALIFIED_SCORE: f64 = 0.8;
/// Ceiling of the experience score for candidates below the minimum.
const UNDERQUALIFIED_CEILING: f64 = 0.5;
/// Education score when the degree level is met but the field differs.
const FIELD_MISMATCH_SCORE: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.6,
            experience: 0.3,
            education: 0.1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WeightedMatchingService {
    weights: MatchWeights,
}

impl WeightedMatchingService {
    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Scores a single candidate. Exposed for callers that do not need ranking.
    pub fn score_candidate(&self, candidate: &Cv, job: &JobDescription) -> CandidateMatch {
        let breakdown = ScoreBreakdown {
            skills: skill_score(candidate, job),
            experience: experience_score(candidate, job),
            education: education_score(candidate, job),
        };

        let score = (breakdown.skills * self.weights.skills
            + breakdown.experience * self.weights.experience
            + breakdown.education * self.weights.education)
            .clamp(0.0, 1.0);

        CandidateMatch {
            candidate: candidate.clone(),
            score,
            breakdown,
        }
    }
}

#[async_trait]
impl MatchingService for WeightedMatchingService {
    async fn analyze_and_rank(
        &self,
        candidates: &[Cv],
        job: &JobDescription,
    ) -> Vec<CandidateMatch> {
        let mut matches: Vec<CandidateMatch> = candidates
            .iter()
            .map(|candidate| self.score_candidate(candidate, job))
            .collect();

        // Stable sort keeps library order for equal scores.
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!("Ranked {} candidates for '{}'", matches.len(), job.title());
        matches
    }
}

fn skill_score(candidate: &Cv, job: &JobDescription) -> f64 {
    let required = job.required_skills();
    if required.is_empty() {
        return 1.0;
    }
    let matched = required.iter().filter(|s| candidate.has_skill(s)).count();
    matched as f64 / required.len() as f64
}

fn experience_score(candidate: &Cv, job: &JobDescription) -> f64 {
    let range = job.required_experience();
    let years = candidate.years_experience();

    if range.matches(years) {
        1.0
    } else if years > range.min_years() {
        OVERQUALIFIED_SCORE
    } else {
        // years < min_years here, so min_years > 0
        UNDERQUALIFIED_CEILING * (years as f64 / range.min_years() as f64)
    }
}

fn education_score(candidate: &Cv, job: &JobDescription) -> f64 {
    let requirements = job.required_education();
    if requirements.is_empty() {
        return 1.0;
    }

    requirements
        .iter()
        .flat_map(|req| {
            candidate
                .education()
                .iter()
                .map(move |edu| requirement_score(req, edu))
        })
        .fold(0.0, f64::max)
}

fn requirement_score(req: &DegreeRequirement, edu: &Education) -> f64 {
    if !degree_satisfies(&edu.degree, &req.degree_type) {
        return 0.0;
    }
    if req.field.is_empty() || edu.field.trim().eq_ignore_ascii_case(&req.field) {
        1.0
    } else {
        FIELD_MISMATCH_SCORE
    }
}

/// A higher recognised degree satisfies a lower one; unrecognised degrees
/// must match by name.
fn degree_satisfies(held: &str, required: &str) -> bool {
    if required.trim().is_empty() {
        return true;
    }
    match (degree_level(held), degree_level(required)) {
        (Some(held), Some(required)) => held >= required,
        _ => {
            let held = held.trim().to_lowercase();
            let required = required.trim().to_lowercase();
            held == required || held.contains(&required)
        }
    }
}

/// Ordinal rank of common degree names: associate < bachelor < master < doctorate.
pub fn degree_level(degree: &str) -> Option<u8> {
    let d = degree.trim().to_lowercase();
    if d.contains("phd") || d.contains("ph.d") || d.contains("doctor") {
        Some(4)
    } else if d.contains("master") || d.starts_with("msc") || d.starts_with("mba") {
        Some(3)
    } else if d.contains("bachelor") || d.starts_with("bsc") {
        Some(2)
    } else if d.contains("associate") {
        Some(1)
    } else {
        None
    }
}
