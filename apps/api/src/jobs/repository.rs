use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::validation::{JobPatch, NewJob};
use crate::models::job::{ApplicationRow, ApplicationStatus, JobRow};

pub async fn list_jobs(pool: &PgPool) -> Result<Vec<JobRow>, AppError> {
    Ok(
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?,
    )
}

pub async fn get_job(pool: &PgPool, id: Uuid) -> Result<JobRow, AppError> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job not found with id of {id}")))
}

pub async fn insert_job(pool: &PgPool, job: NewJob) -> Result<JobRow, AppError> {
    let row = sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs
            (id, title, description, employer_id, location, salary,
             requirements, job_type, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&job.title)
    .bind(&job.description)
    .bind(&job.employer_id)
    .bind(&job.location)
    .bind(&job.salary)
    .bind(&job.requirements)
    .bind(job.job_type.as_str())
    .bind(job.status.as_str())
    .fetch_one(pool)
    .await?;

    info!("Inserted job {} for employer {}", row.id, row.employer_id);
    Ok(row)
}

pub async fn update_job(pool: &PgPool, id: Uuid, patch: JobPatch) -> Result<JobRow, AppError> {
    let salary_set = patch.salary.is_some();
    sqlx::query_as::<_, JobRow>(
        r#"
        UPDATE jobs SET
            title        = COALESCE($2, title),
            description  = COALESCE($3, description),
            location     = COALESCE($4, location),
            salary       = CASE WHEN $9 THEN $5 ELSE salary END,
            requirements = COALESCE($6, requirements),
            job_type     = COALESCE($7, job_type),
            status       = COALESCE($8, status)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(patch.title)
    .bind(patch.description)
    .bind(patch.location)
    .bind(patch.salary.flatten())
    .bind(patch.requirements)
    .bind(patch.job_type.map(|t| t.as_str()))
    .bind(patch.status.map(|s| s.as_str()))
    .bind(salary_set)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Job not found with id of {id}")))
}

pub async fn delete_job(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Job not found with id of {id}")));
    }
    info!("Deleted job {id}");
    Ok(())
}

pub struct NewApplication<'a> {
    pub job_id: Uuid,
    pub applicant_id: &'a str,
    pub resume: Option<&'a str>,
    pub cover_letter: Option<&'a str>,
}

/// One application per (job, applicant); a repeat is a 409.
pub async fn insert_application(
    pool: &PgPool,
    application: NewApplication<'_>,
) -> Result<ApplicationRow, AppError> {
    let NewApplication {
        job_id,
        applicant_id,
        resume,
        cover_letter,
    } = application;

    let result = sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications
            (id, job_id, applicant_id, resume, cover_letter, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(job_id)
    .bind(applicant_id)
    .bind(resume)
    .bind(cover_letter)
    .bind(ApplicationStatus::default().as_str())
    .fetch_one(pool)
    .await;

    match result {
        Ok(row) => {
            info!("Recorded application {} to job {job_id} by {applicant_id}", row.id);
            Ok(row)
        }
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(AppError::Conflict(
            format!("User {applicant_id} has already applied to job {job_id}"),
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn list_applications(pool: &PgPool, job_id: Uuid) -> Result<Vec<ApplicationRow>, AppError> {
    Ok(sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE job_id = $1 ORDER BY applied_at ASC",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await?)
}
