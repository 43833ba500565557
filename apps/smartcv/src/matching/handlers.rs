//! Axum route handlers for search and analysis.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::CandidateMatch;
use crate::models::job::{DegreeRequirement, ExperienceRange, JobDescription};
use crate::models::ValidationError;
use crate::report::AnalysisReport;
use crate::state::AppState;

/// Job description as accepted over the API. Everything but the title is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRequest {
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub min_years: u32,
    #[serde(default)]
    pub max_years: Option<u32>,
    #[serde(default)]
    pub required_education: Vec<DegreeRequirement>,
    /// Return only the best `limit` candidates.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl JobRequest {
    pub fn to_job(&self) -> Result<JobDescription, ValidationError> {
        JobDescription::new(
            &self.title,
            &self.required_skills,
            ExperienceRange::new(self.min_years, self.max_years)?,
            self.required_education.clone(),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub job: JobDescription,
    pub matches: Vec<CandidateMatch>,
}

async fn rank(
    state: &AppState,
    request: &JobRequest,
) -> Result<(JobDescription, Vec<CandidateMatch>), AppError> {
    let job = request.to_job()?;
    let mut matches = state
        .matcher
        .analyze_and_rank(state.library.candidates(), &job)
        .await;
    if let Some(limit) = request.limit {
        matches.truncate(limit);
    }
    Ok((job, matches))
}

/// POST /api/v1/search
///
/// Ranks the library against the job and returns scored candidates, best first.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<JobRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let (job, matches) = rank(&state, &request).await?;
    Ok(Json(SearchResponse { job, matches }))
}

/// POST /api/v1/analyze
///
/// Same ranking as `/search`, returned as a detailed report with matched and
/// missing skills per candidate.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<JobRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let (job, matches) = rank(&state, &request).await?;
    Ok(Json(AnalysisReport::build(&matches, &job)))
}
