use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::accounts::{require_role, resolve_actor, AccountQuery};
use crate::errors::AppError;
use crate::jobs::repository::{self, NewApplication};
use crate::jobs::validation::{
    ensure_can_manage, validate_job_patch, validate_new_job, CreateJobRequest, UpdateJobRequest,
};
use crate::models::account::Role;
use crate::models::job::{ApplicationRow, JobRow};
use crate::state::AppState;

const JOB_MANAGERS: &[Role] = &[Role::Employer, Role::Admin];

#[derive(Serialize)]
pub struct JobListResponse {
    pub count: usize,
    pub jobs: Vec<JobRow>,
}

#[derive(Serialize)]
pub struct ApplicationListResponse {
    pub count: usize,
    pub applications: Vec<ApplicationRow>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApplyRequest {
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = repository::list_jobs(&state.db).await?;
    Ok(Json(JobListResponse {
        count: jobs.len(),
        jobs,
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    Ok(Json(repository::get_job(&state.db, id).await?))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Query(params): Query<AccountQuery>,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    let actor = resolve_actor(&state, &params.account_id).await?;
    require_role(&actor, JOB_MANAGERS)?;

    let new_job = validate_new_job(req, &actor.id)?;
    let job = repository::insert_job(&state.db, new_job).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<AccountQuery>,
    Json(req): Json<UpdateJobRequest>,
) -> Result<Json<JobRow>, AppError> {
    let actor = resolve_actor(&state, &params.account_id).await?;
    require_role(&actor, JOB_MANAGERS)?;
    let patch = validate_job_patch(req)?;

    let existing = repository::get_job(&state.db, id).await?;
    ensure_can_manage(&existing, &actor)?;

    Ok(Json(repository::update_job(&state.db, id, patch).await?))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<AccountQuery>,
) -> Result<StatusCode, AppError> {
    let actor = resolve_actor(&state, &params.account_id).await?;
    require_role(&actor, JOB_MANAGERS)?;

    let existing = repository::get_job(&state.db, id).await?;
    ensure_can_manage(&existing, &actor)?;

    repository::delete_job(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/jobs/:id/applications
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(params): Query<AccountQuery>,
    Json(req): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    let actor = resolve_actor(&state, &params.account_id).await?;
    require_role(&actor, &[Role::JobSeeker])?;

    let job = repository::get_job(&state.db, job_id).await?;
    if !job.is_active() {
        return Err(AppError::Validation(format!(
            "Job {job_id} is closed to new applications"
        )));
    }

    let application = repository::insert_application(
        &state.db,
        NewApplication {
            job_id,
            applicant_id: &actor.id,
            resume: req.resume.as_deref(),
            cover_letter: req.cover_letter.as_deref(),
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/jobs/:id/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(params): Query<AccountQuery>,
) -> Result<Json<ApplicationListResponse>, AppError> {
    let actor = resolve_actor(&state, &params.account_id).await?;
    let job = repository::get_job(&state.db, job_id).await?;
    ensure_can_manage(&job, &actor)?;

    let applications = repository::list_applications(&state.db, job_id).await?;
    Ok(Json(ApplicationListResponse {
        count: applications.len(),
        applications,
    }))
}
