use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::library::sample::MAX_SAMPLE_SIZE;

/// How the binary runs: the interactive terminal menu or the HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Serve,
}

impl RunMode {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "interactive" | "cli" => Ok(RunMode::Interactive),
            "serve" | "server" | "http" => Ok(RunMode::Serve),
            other => bail!("SMARTCV_MODE must be 'interactive' or 'serve', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults give the interactive menu over the
/// built-in sample library.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: RunMode,
    pub port: u16,
    pub rust_log: String,
    /// Directory of résumé files. When unset the sample library is generated.
    pub library_dir: Option<PathBuf>,
    /// Seed for the sample library; random when unset.
    pub library_seed: Option<u64>,
    pub library_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let library_size = match optional_env("SMARTCV_LIBRARY_SIZE") {
            Some(v) => v
                .parse::<usize>()
                .context("SMARTCV_LIBRARY_SIZE must be a non-negative integer")?,
            None => MAX_SAMPLE_SIZE,
        };
        if library_size > MAX_SAMPLE_SIZE {
            bail!("SMARTCV_LIBRARY_SIZE must be at most {MAX_SAMPLE_SIZE}");
        }

        Ok(Config {
            mode: RunMode::parse(&optional_env("SMARTCV_MODE").unwrap_or_default())?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            library_dir: optional_env("SMARTCV_LIBRARY_DIR").map(PathBuf::from),
            library_seed: optional_env("SMARTCV_LIBRARY_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("SMARTCV_LIBRARY_SEED must be an unsigned integer")?,
            library_size,
        })
    }
}

/// Reads an env var, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
