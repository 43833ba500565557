mod cli;
mod config;
mod errors;
mod library;
mod matching;
mod models;
mod parsing;
mod report;
mod routes;
mod state;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Session;
use crate::config::{Config, RunMode};
use crate::library::CandidateLibrary;
use crate::matching::WeightedMatchingService;
use crate::parsing::SimpleResumeParser;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the interactive menu.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting Smart CV Analyzer v{}", env!("CARGO_PKG_VERSION"));

    let parser = Arc::new(SimpleResumeParser);
    let library = CandidateLibrary::load(&config, parser.as_ref())?;
    if library.is_empty() {
        warn!("Candidate library is empty; searches will return no results");
    }

    let matcher = WeightedMatchingService::default();
    info!("Matcher weights: {:?}", matcher.weights());

    let state = AppState {
        library: Arc::new(library),
        matcher: Arc::new(matcher),
        parser,
    };

    match config.mode {
        RunMode::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(&state, stdin.lock(), stdout.lock()).run().await?;
        }
        RunMode::Serve => serve(state, config.port).await?,
    }

    Ok(())
}

async fn serve(state: AppState, port: u16) -> Result<()> {
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
