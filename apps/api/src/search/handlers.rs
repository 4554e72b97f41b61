use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::accounts::{resolve_actor, OptionalAccountQuery};
use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::saved::index::is_saved;
use crate::search::evaluator::evaluate;
use crate::search::facets::{facet_options, FacetOptions};
use crate::search::filter::FilterState;
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct FacetQuery {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct CandidateListResponse {
    pub count: usize,
    pub candidates: Vec<Candidate>,
}

#[derive(Serialize)]
pub struct CandidateResult {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub is_saved: bool,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub total: usize,
    pub count: usize,
    pub has_filters: bool,
    pub candidates: Vec<CandidateResult>,
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Json<CandidateListResponse> {
    let candidates = state.candidates.all().to_vec();
    Json(CandidateListResponse {
        count: candidates.len(),
        candidates,
    })
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, AppError> {
    state
        .candidates
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}

/// POST /api/v1/search/candidates
///
/// Evaluates the posted filter state. When an acting account is given, each
/// row carries its saved flag for that account.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<OptionalAccountQuery>,
    Json(filters): Json<FilterState>,
) -> Result<Json<SearchResponse>, AppError> {
    let actor = match params.account_id.as_deref() {
        Some(id) => Some(resolve_actor(&state, id).await?),
        None => None,
    };

    let candidates: Vec<CandidateResult> =
        evaluate(&state.candidates, &filters, state.config.experience_match)
            .into_iter()
            .map(|c| CandidateResult {
                is_saved: actor.as_ref().is_some_and(|a| is_saved(a, &c.id)),
                candidate: c.clone(),
            })
            .collect();

    Ok(Json(SearchResponse {
        total: state.candidates.len(),
        count: candidates.len(),
        has_filters: filters.has_filters(),
        candidates,
    }))
}

/// GET /api/v1/search/facets
pub async fn handle_facets(
    State(state): State<AppState>,
    Query(params): Query<FacetQuery>,
) -> Json<FacetOptions> {
    Json(facet_options(&state.candidates, params.category.as_deref()))
}

/// GET /api/v1/search/filters/clear
pub async fn handle_clear_filters() -> Json<FilterState> {
    Json(FilterState::cleared())
}
