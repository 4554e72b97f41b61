mod accounts;
mod candidates;
mod config;
mod db;
mod errors;
mod jobs;
mod models;
mod routes;
mod saved;
mod search;
mod state;
mod taxonomy;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::accounts::directory::AccountDirectory;
use crate::candidates::source::{CandidateSource, FixtureCandidateSource, PgCandidateSource};
use crate::candidates::store::CandidateStore;
use crate::config::{CandidateSourceKind, Config};
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentHub API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (jobs, applications, optional candidate table)
    let db = create_pool(&config.database_url).await?;

    // Load the candidate store once; it is read-only from here on
    let source: Box<dyn CandidateSource> = match config.candidate_source {
        CandidateSourceKind::Fixture => match &config.candidates_path {
            Some(path) => Box::new(FixtureCandidateSource::from_path(path.clone())),
            None => Box::new(FixtureCandidateSource::embedded()),
        },
        CandidateSourceKind::Postgres => Box::new(PgCandidateSource::new(db.clone())),
    };
    let candidates = CandidateStore::new(source.load().await?)
        .with_context(|| format!("candidate data from {} source is invalid", source.name()))?;
    if candidates.is_empty() {
        warn!("Candidate store is empty; every search will return no results");
    } else {
        info!(
            "Candidate store loaded: {} candidates from {} source",
            candidates.len(),
            source.name()
        );
    }

    let accounts = AccountDirectory::from_fixture()?;
    info!("Experience matching mode: {:?}", config.experience_match);

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        candidates: Arc::new(candidates),
        accounts: Arc::new(accounts),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
