use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub employer_id: String,
    pub location: String,
    pub salary: Option<String>,
    pub requirements: Vec<String>,
    pub job_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl JobRow {
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_id: String,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
    #[serde(rename = "Freelance")]
    Freelance,
    #[serde(rename = "Internship")]
    Internship,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Freelance => "Freelance",
            JobType::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Reviewed,
    Interview,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }
}
