use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::accounts::{require_role, resolve_actor, AccountQuery};
use crate::errors::AppError;
use crate::models::account::Role;
use crate::models::candidate::Candidate;
use crate::saved::index::{saved_candidates, ToggleOutcome};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SavedListResponse {
    pub count: usize,
    pub candidates: Vec<Candidate>,
}

#[derive(Serialize)]
pub struct ToggleResponse {
    pub candidate_id: String,
    pub outcome: ToggleOutcome,
    pub is_saved: bool,
}

/// GET /api/v1/saved
pub async fn handle_list_saved(
    State(state): State<AppState>,
    Query(params): Query<AccountQuery>,
) -> Result<Json<SavedListResponse>, AppError> {
    let actor = resolve_actor(&state, &params.account_id).await?;
    require_role(&actor, &[Role::Employer])?;

    let candidates: Vec<Candidate> = saved_candidates(&state.candidates, &actor)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(SavedListResponse {
        count: candidates.len(),
        candidates,
    }))
}

/// POST /api/v1/saved/:candidate_id/toggle
///
/// The index treats a non-employer toggle as a no-op; the endpoint surfaces
/// that as 403 so callers are not told a bookmark changed when it did not.
pub async fn handle_toggle_saved(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
    Query(params): Query<AccountQuery>,
) -> Result<Json<ToggleResponse>, AppError> {
    let actor = resolve_actor(&state, &params.account_id).await?;
    if !state.candidates.contains(&candidate_id) {
        return Err(AppError::NotFound(format!(
            "Candidate {candidate_id} not found"
        )));
    }

    let outcome = state.accounts.toggle_saved(&actor.id, &candidate_id).await?;
    let Some(is_saved) = outcome.is_saved() else {
        warn!(account_id = %actor.id, %candidate_id, "saved toggle ignored for non-employer");
        return Err(AppError::Forbidden(
            "Only employer accounts can save candidates".to_string(),
        ));
    };

    Ok(Json(ToggleResponse {
        candidate_id,
        outcome,
        is_saved,
    }))
}
