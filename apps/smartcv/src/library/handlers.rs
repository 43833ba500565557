//! Axum route handlers for the candidate library.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::Cv;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub total: usize,
    pub candidates: Vec<Cv>,
}

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub raw_text: String,
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(State(state): State<AppState>) -> Json<CandidateListResponse> {
    Json(CandidateListResponse {
        total: state.library.len(),
        candidates: state.library.candidates().to_vec(),
    })
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Cv>, AppError> {
    state
        .library
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}

/// POST /api/v1/candidates/parse
///
/// Parses résumé text into a CV without adding it to the library.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<Cv>, AppError> {
    let cv = state.parser.parse(&request.raw_text)?;
    Ok(Json(cv))
}
