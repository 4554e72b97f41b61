//! Candidate sources: where the store's records come from.
//!
//! Default: `FixtureCandidateSource` (embedded JSON, or a JSON file on disk).
//! `PgCandidateSource` reads the `candidates` table ordered by `position`.
//!
//! Loading may suspend on I/O; filtering over the loaded store never does.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::info;

use crate::models::candidate::{Availability, Candidate};
use crate::taxonomy::Category;

const EMBEDDED_CANDIDATES: &str = include_str!("../../fixtures/candidates.json");

#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Candidate>>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

pub fn parse_candidates(json: &str) -> Result<Vec<Candidate>> {
    serde_json::from_str(json).context("candidate fixture is not valid JSON")
}

// ────────────────────────────────────────────────────────────────────────────
// Fixture
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct FixtureCandidateSource {
    path: Option<PathBuf>,
}

impl FixtureCandidateSource {
    pub fn embedded() -> Self {
        Self { path: None }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

#[async_trait]
impl CandidateSource for FixtureCandidateSource {
    async fn load(&self) -> Result<Vec<Candidate>> {
        let candidates = match &self.path {
            None => parse_candidates(EMBEDDED_CANDIDATES)?,
            Some(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("failed to read candidates from {}", path.display()))?;
                parse_candidates(&raw)?
            }
        };
        info!("Loaded {} candidates from fixture", candidates.len());
        Ok(candidates)
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub id: String,
    pub name: String,
    pub title: String,
    pub location: String,
    pub avatar: Option<String>,
    pub skills: Vec<String>,
    pub experience: String,
    pub category: String,
    pub job_role: String,
    pub availability: String,
    pub salary: String,
}

impl TryFrom<CandidateRow> for Candidate {
    type Error = anyhow::Error;

    fn try_from(row: CandidateRow) -> Result<Self> {
        let category = Category::from_label(&row.category)
            .ok_or_else(|| anyhow!("candidate '{}' has unknown category '{}'", row.id, row.category))?;
        let availability = Availability::from_label(&row.availability).ok_or_else(|| {
            anyhow!(
                "candidate '{}' has unknown availability '{}'",
                row.id,
                row.availability
            )
        })?;
        Ok(Candidate {
            id: row.id,
            name: row.name,
            title: row.title,
            location: row.location,
            avatar: row.avatar,
            skills: row.skills,
            experience: row.experience,
            category,
            job_role: row.job_role,
            availability,
            salary: row.salary,
        })
    }
}

pub struct PgCandidateSource {
    pool: PgPool,
}

impl PgCandidateSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateSource for PgCandidateSource {
    async fn load(&self) -> Result<Vec<Candidate>> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT id, name, title, location, avatar, skills, experience,
                   category, job_role, availability, salary
            FROM candidates
            ORDER BY position ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to load candidates from PostgreSQL")?;

        let candidates = rows
            .into_iter()
            .map(Candidate::try_from)
            .collect::<Result<Vec<_>>>()?;
        info!("Loaded {} candidates from PostgreSQL", candidates.len());
        Ok(candidates)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
pub fn fixture_candidates() -> Vec<Candidate> {
    parse_candidates(EMBEDDED_CANDIDATES).unwrap()
}
