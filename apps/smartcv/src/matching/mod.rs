//! Candidate matching — scores every CV in the library against a job
//! description and ranks them.
//!
//! `MatchingService` is the seam. `AppState` carries an
//! `Arc<dyn MatchingService>`; the default backend is `WeightedMatchingService`.

pub mod handlers;
pub mod weighted;

use async_trait::async_trait;
use serde::Serialize;

use crate::models::cv::Cv;
use crate::models::job::JobDescription;

pub use weighted::WeightedMatchingService;

/// Per-dimension scores, each in `[0, 1]`, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

/// A candidate paired with how well they fit a job.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateMatch {
    pub candidate: Cv,
    /// Weighted total in `[0, 1]`.
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl CandidateMatch {
    pub fn score_percent(&self) -> f64 {
        self.score * 100.0
    }
}

#[async_trait]
pub trait MatchingService: Send + Sync {
    /// Scores every candidate and returns them best first. Candidates with
    /// equal scores keep their input order.
    async fn analyze_and_rank(
        &self,
        candidates: &[Cv],
        job: &JobDescription,
    ) -> Vec<CandidateMatch>;
}
