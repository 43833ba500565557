//! Loads a directory of résumé files into CVs.
//!
//! `.txt` and `.md` files are read as text, `.pdf` files go through
//! `pdf-extract`. Files that cannot be read or parsed are skipped with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::models::cv::Cv;
use crate::parsing::ResumeParser;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("Failed to read directory '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResumeFormat {
    Text,
    Pdf,
}

fn resume_format(path: &Path) -> Option<ResumeFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "txt" | "md" => Some(ResumeFormat::Text),
        "pdf" => Some(ResumeFormat::Pdf),
        _ => None,
    }
}

/// Parses every supported résumé file in `dir` (non-recursive), in file name order.
pub fn load_directory(dir: &Path, parser: &dyn ResumeParser) -> Result<Vec<Cv>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let read_dir = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = read_dir
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && resume_format(path).is_some())
        .collect();
    paths.sort();

    let mut candidates = Vec::with_capacity(paths.len());
    for path in &paths {
        let text = match read_resume_text(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping '{}': {e}", path.display());
                continue;
            }
        };

        match parser.parse(&text) {
            Ok(cv) => candidates.push(cv),
            Err(e) => warn!("Skipping '{}': {e}", path.display()),
        }
    }

    info!(
        "Loaded {} of {} resume files from '{}'",
        candidates.len(),
        paths.len(),
        dir.display()
    );
    Ok(candidates)
}

fn read_resume_text(path: &Path) -> anyhow::Result<String> {
    match resume_format(path) {
        Some(ResumeFormat::Pdf) => pdf_extract::extract_text(path)
            .map_err(|e| anyhow::anyhow!("PDF extraction failed: {e}")),
        Some(ResumeFormat::Text) => Ok(fs::read_to_string(path)?),
        None => anyhow::bail!("unsupported file type"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::SimpleResumeParser;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_loads_text_resumes_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "b.txt",
            "Name: Bob Brown\nEmail: bob@brown.com\nSkills: Go\nExperience: 2 years",
        );
        write(
            dir.path(),
            "a.md",
            "Name: Alice Adams\nEmail: alice@adams.com\nSkills: Rust\nExperience: 5 years",
        );

        let cvs = load_directory(dir.path(), &SimpleResumeParser).unwrap();
        let names: Vec<_> = cvs.iter().map(|cv| cv.name().to_string()).collect();
        assert_eq!(names, vec!["Alice Adams", "Bob Brown"]);
    }

    #[test]
    fn test_skips_invalid_and_unsupported_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "ok.txt", "Name: Alice Adams\nEmail: alice@adams.com");
        write(dir.path(), "no-email.txt", "Name: Bob Brown\nSkills: Go");
        write(dir.path(), "notes.docx", "Name: Carl Cox\nEmail: carl@cox.com");

        let cvs = load_directory(dir.path(), &SimpleResumeParser).unwrap();
        assert_eq!(cvs.len(), 1);
        assert_eq!(cvs[0].name(), "Alice Adams");
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = load_directory(&missing, &SimpleResumeParser).unwrap_err();
        assert!(matches!(err, LoadError::NotADirectory(_)));
    }

    #[test]
    fn test_resume_format_by_extension() {
        assert_eq!(resume_format(Path::new("cv.TXT")), Some(ResumeFormat::Text));
        assert_eq!(resume_format(Path::new("cv.pdf")), Some(ResumeFormat::Pdf));
        assert_eq!(resume_format(Path::new("cv.docx")), None);
        assert_eq!(resume_format(Path::new("README")), None);
    }
}
