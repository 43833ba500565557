//! Résumé parsing — turns raw résumé text into validated `Cv` values.
//!
//! `ResumeParser` is the seam; `SimpleResumeParser` is the labelled-text
//! implementation used for the sample library, directory loading and the API.

pub mod loader;
pub mod resume_parser;

use thiserror::Error;

use crate::models::cv::Cv;
use crate::models::ValidationError;

pub use resume_parser::SimpleResumeParser;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Resume text is empty")]
    Empty,

    #[error("Resume failed validation: {0}")]
    Invalid(#[from] ValidationError),
}

/// Parses raw résumé text into a `Cv`.
pub trait ResumeParser: Send + Sync {
    fn parse(&self, raw_text: &str) -> Result<Cv, ParseError>;
}
