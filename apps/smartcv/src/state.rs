use std::sync::Arc;

use crate::library::CandidateLibrary;
use crate::matching::MatchingService;
use crate::parsing::ResumeParser;

/// Shared state for the interactive session and the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub library: Arc<CandidateLibrary>,
    /// Pluggable matcher. Default: WeightedMatchingService.
    pub matcher: Arc<dyn MatchingService>,
    pub parser: Arc<dyn ResumeParser>,
}

#[cfg(test)]
pub fn test_state() -> AppState {
    use crate::matching::WeightedMatchingService;
    use crate::parsing::SimpleResumeParser;

    AppState {
        library: Arc::new(CandidateLibrary::sample(10, Some(2024), &SimpleResumeParser)),
        matcher: Arc::new(WeightedMatchingService::default()),
        parser: Arc::new(SimpleResumeParser),
    }
}
