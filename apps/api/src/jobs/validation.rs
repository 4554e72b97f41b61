use serde::Deserialize;

use crate::errors::AppError;
use crate::models::account::{Account, Role};
use crate::models::job::{JobRow, JobStatus, JobType};

pub const MAX_TITLE_LEN: usize = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub job_type: JobType,
    #[serde(default)]
    pub status: JobStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
}

/// Validated, normalised fields for an INSERT.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub employer_id: String,
    pub location: String,
    pub salary: Option<String>,
    pub requirements: Vec<String>,
    pub job_type: JobType,
    pub status: JobStatus,
}

/// Validated subset of fields for an UPDATE. `None` leaves the column as is.
/// `salary` is tri-state: `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary: Option<Option<String>>,
    pub requirements: Option<Vec<String>>,
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
}

pub fn validate_title(title: &str) -> Result<String, AppError> {
    let title = require_text("title", title)?;
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::Validation(format!(
            "title can not be more than {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(title)
}

pub fn require_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trims entries and drops blanks, keeping order.
pub fn normalize_requirements(requirements: Vec<String>) -> Vec<String> {
    requirements
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect()
}

fn normalize_salary(salary: Option<String>) -> Option<String> {
    salary
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn validate_new_job(req: CreateJobRequest, employer_id: &str) -> Result<NewJob, AppError> {
    Ok(NewJob {
        title: validate_title(&req.title)?,
        description: require_text("description", &req.description)?,
        employer_id: employer_id.to_string(),
        location: require_text("location", &req.location)?,
        salary: normalize_salary(req.salary),
        requirements: normalize_requirements(req.requirements),
        job_type: req.job_type,
        status: req.status,
    })
}

pub fn validate_job_patch(req: UpdateJobRequest) -> Result<JobPatch, AppError> {
    Ok(JobPatch {
        title: req.title.as_deref().map(validate_title).transpose()?,
        description: req
            .description
            .as_deref()
            .map(|d| require_text("description", d))
            .transpose()?,
        location: req
            .location
            .as_deref()
            .map(|l| require_text("location", l))
            .transpose()?,
        // A blank salary clears the stored one.
        salary: req.salary.map(|s| normalize_salary(Some(s))),
        requirements: req.requirements.map(normalize_requirements),
        job_type: req.job_type,
        status: req.status,
    })
}

/// Owners and admins may modify a job; everyone else gets 403.
pub fn ensure_can_manage(job: &JobRow, actor: &Account) -> Result<(), AppError> {
    if job.employer_id == actor.id || actor.role == Role::Admin {
        return Ok(());
    }
    Err(AppError::Forbidden(format!(
        "User {} is not authorized to modify job {}",
        actor.id, job.id
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::account::AccountStatus;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn create_request() -> CreateJobRequest {
        CreateJobRequest {
            title: "  Senior Rust Engineer ".to_string(),
            description: "Build the matching engine".to_string(),
            location: "Remote".to_string(),
            salary: Some("  ".to_string()),
            requirements: vec!["Rust".to_string(), " ".to_string(), " Tokio ".to_string()],
            job_type: JobType::default(),
            status: JobStatus::default(),
        }
    }

    fn job(employer_id: &str) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            title: "Backend Developer".to_string(),
            description: "APIs".to_string(),
            employer_id: employer_id.to_string(),
            location: "Austin, TX".to_string(),
            salary: None,
            requirements: vec![],
            job_type: "Full-time".to_string(),
            status: "active".to_string(),
            created_at: Utc::now(),
        }
    }

    fn actor(id: &str, role: Role) -> Account {
        Account {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            name: id.to_string(),
            role,
            status: AccountStatus::Active,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            saved_candidates: Default::default(),
            profile: None,
        }
    }

    #[test]
    fn test_new_job_is_normalised() {
        let job = validate_new_job(create_request(), "2").unwrap();
        assert_eq!(job.title, "Senior Rust Engineer");
        assert_eq!(job.salary, None);
        assert_eq!(job.requirements, vec!["Rust", "Tokio"]);
        assert_eq!(job.employer_id, "2");
        assert_eq!(job.job_type, JobType::FullTime);
        assert_eq!(job.status, JobStatus::Active);
    }

    #[test]
    fn test_title_length_limit() {
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN)).is_ok());
        assert!(matches!(
            validate_title(&"x".repeat(MAX_TITLE_LEN + 1)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_required_fields() {
        let mut req = create_request();
        req.description = "   ".to_string();
        assert!(validate_new_job(req, "2").is_err());

        let mut req = create_request();
        req.location = String::new();
        assert!(validate_new_job(req, "2").is_err());

        let mut req = create_request();
        req.title = String::new();
        assert!(validate_new_job(req, "2").is_err());
    }

    #[test]
    fn test_patch_validates_only_present_fields() {
        let patch = validate_job_patch(UpdateJobRequest {
            status: Some(JobStatus::Closed),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.status, Some(JobStatus::Closed));
        assert!(patch.title.is_none());

        assert!(validate_job_patch(UpdateJobRequest {
            title: Some(" ".to_string()),
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn test_patch_salary_is_tri_state() {
        let keep = validate_job_patch(UpdateJobRequest::default()).unwrap();
        assert_eq!(keep.salary, None);

        let clear = validate_job_patch(UpdateJobRequest {
            salary: Some("  ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(clear.salary, Some(None));

        let set = validate_job_patch(UpdateJobRequest {
            salary: Some(" $90k ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(set.salary, Some(Some("$90k".to_string())));
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateJobRequest = serde_json::from_str(
            r#"{"title":"Designer","description":"Figma work","location":"NYC"}"#,
        )
        .unwrap();
        assert_eq!(req.job_type, JobType::FullTime);
        assert_eq!(req.status, JobStatus::Active);
        assert!(req.requirements.is_empty());
    }

    #[test]
    fn test_owner_and_admin_can_manage() {
        let job = job("2");
        assert!(ensure_can_manage(&job, &actor("2", Role::Employer)).is_ok());
        assert!(ensure_can_manage(&job, &actor("3", Role::Admin)).is_ok());
        assert!(matches!(
            ensure_can_manage(&job, &actor("5", Role::Employer)),
            Err(AppError::Forbidden(_))
        ));
    }
}
