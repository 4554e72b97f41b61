use std::sync::Arc;

use sqlx::PgPool;

use crate::accounts::directory::AccountDirectory;
use crate::candidates::store::CandidateStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Read-only after startup.
    pub candidates: Arc<CandidateStore>,
    pub accounts: Arc<AccountDirectory>,
}
