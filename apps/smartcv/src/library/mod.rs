//! Candidate library — the CVs every search ranks.

pub mod handlers;
pub mod sample;

use chrono::{Datelike, Utc};
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::models::cv::Cv;
use crate::parsing::loader::{load_directory, LoadError};
use crate::parsing::ResumeParser;

/// CVs in load order. Immutable once built; shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CandidateLibrary {
    candidates: Vec<Cv>,
}

impl CandidateLibrary {
    pub fn new(candidates: Vec<Cv>) -> Self {
        Self { candidates }
    }

    /// Generated sample profiles (see `sample`).
    pub fn sample(size: usize, seed: Option<u64>, parser: &dyn ResumeParser) -> Self {
        let current_year = Utc::now().year();
        Self::new(sample::sample_candidates(size, seed, current_year, parser))
    }

    /// Builds the library from `SMARTCV_LIBRARY_DIR` when configured, else the
    /// sample profiles.
    pub fn load(config: &Config, parser: &dyn ResumeParser) -> Result<Self, LoadError> {
        let library = match &config.library_dir {
            Some(dir) => Self::new(load_directory(dir, parser)?),
            None => Self::sample(config.library_size, config.library_seed, parser),
        };
        info!("Candidate library ready: {} profiles", library.len());
        Ok(library)
    }

    pub fn candidates(&self) -> &[Cv] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Cv> {
        self.candidates.iter().find(|cv| cv.id() == id)
    }
}
