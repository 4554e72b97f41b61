use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::search::experience::ExperienceMatch;

/// Where the candidate store is loaded from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSourceKind {
    Fixture,
    Postgres,
}

impl FromStr for CandidateSourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixture" => Ok(CandidateSourceKind::Fixture),
            "postgres" => Ok(CandidateSourceKind::Postgres),
            other => Err(anyhow!(
                "unknown candidate source '{other}' (expected 'fixture' or 'postgres')"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub candidate_source: CandidateSourceKind,
    pub candidates_path: Option<PathBuf>,
    pub experience_match: ExperienceMatch,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            candidate_source: optional_env("CANDIDATE_SOURCE")
                .unwrap_or_else(|| "fixture".to_string())
                .parse()
                .context("CANDIDATE_SOURCE is invalid")?,
            candidates_path: optional_env("CANDIDATES_PATH").map(PathBuf::from),
            experience_match: optional_env("EXPERIENCE_MATCH")
                .unwrap_or_else(|| "loose".to_string())
                .parse()
                .context("EXPERIENCE_MATCH is invalid")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
