use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::accounts::directory::{filter_accounts, AccountFilter, AccountUpdate, NewAccount};
use crate::accounts::navigation::NavItem;
use crate::accounts::profile::{public_profile, ProfileUpdate, PublicProfile};
use crate::accounts::{require_role, resolve_actor, AccountQuery};
use crate::errors::AppError;
use crate::models::account::{Account, Role};
use crate::state::AppState;

#[derive(Serialize)]
pub struct MeResponse {
    pub account: Account,
    pub dashboard: &'static str,
    pub navigation: &'static [NavItem],
}

#[derive(Serialize)]
pub struct UserListResponse {
    pub total: usize,
    pub count: usize,
    pub users: Vec<Account>,
}

/// GET /api/v1/me
pub async fn handle_me(
    State(state): State<AppState>,
    Query(params): Query<AccountQuery>,
) -> Result<Json<MeResponse>, AppError> {
    let account = resolve_actor(&state, &params.account_id).await?;
    Ok(Json(MeResponse {
        dashboard: account.role.dashboard_href(),
        navigation: account.role.navigation(),
        account,
    }))
}

/// PATCH /api/v1/me/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Query(params): Query<AccountQuery>,
    Json(req): Json<ProfileUpdate>,
) -> Result<Json<Account>, AppError> {
    let actor = resolve_actor(&state, &params.account_id).await?;
    require_role(&actor, &[Role::JobSeeker])?;
    Ok(Json(state.accounts.update_profile(&actor.id, req).await?))
}

/// GET /api/v1/profiles/:id
///
/// Hidden profiles are indistinguishable from missing ones.
pub async fn handle_public_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicProfile>, AppError> {
    state
        .accounts
        .get(&id)
        .await
        .as_ref()
        .and_then(public_profile)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))
}

async fn require_admin(state: &AppState, account_id: &str) -> Result<Account, AppError> {
    let actor = resolve_actor(state, account_id).await?;
    require_role(&actor, &[Role::Admin])?;
    Ok(actor)
}

/// GET /api/v1/admin/users?q=&role=&status=
pub async fn handle_list_users(
    State(state): State<AppState>,
    Query(params): Query<AccountQuery>,
    Query(filter): Query<AccountFilter>,
) -> Result<Json<UserListResponse>, AppError> {
    require_admin(&state, &params.account_id).await?;
    let all = state.accounts.list().await;
    let total = all.len();
    let users = filter_accounts(all, &filter);
    Ok(Json(UserListResponse {
        total,
        count: users.len(),
        users,
    }))
}

/// POST /api/v1/admin/users
pub async fn handle_create_user(
    State(state): State<AppState>,
    Query(params): Query<AccountQuery>,
    Json(req): Json<NewAccount>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    require_admin(&state, &params.account_id).await?;
    let account = state.accounts.create(req).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// PATCH /api/v1/admin/users/:id
pub async fn handle_update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<AccountQuery>,
    Json(req): Json<AccountUpdate>,
) -> Result<Json<Account>, AppError> {
    require_admin(&state, &params.account_id).await?;
    Ok(Json(state.accounts.update(&id, req).await?))
}

/// DELETE /api/v1/admin/users/:id
pub async fn handle_delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<AccountQuery>,
) -> Result<StatusCode, AppError> {
    let actor = require_admin(&state, &params.account_id).await?;
    if actor.id == id {
        return Err(AppError::Validation(
            "Administrators cannot delete their own account".to_string(),
        ));
    }
    state.accounts.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/users/:id/toggle-status
pub async fn handle_toggle_user_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<AccountQuery>,
) -> Result<Json<Account>, AppError> {
    require_admin(&state, &params.account_id).await?;
    Ok(Json(state.accounts.toggle_status(&id).await?))
}
