use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    JobSeeker,
    Employer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::JobSeeker => "jobseeker",
            Role::Employer => "employer",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            AccountStatus::Active => AccountStatus::Inactive,
            AccountStatus::Inactive => AccountStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub status: AccountStatus,
    pub created_at: NaiveDate,
    /// Saved candidate ids. Non-empty only for employers.
    #[serde(default)]
    pub saved_candidates: BTreeSet<String>,
    /// Job seekers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

impl Account {
    pub fn is_employer(&self) -> bool {
        self.role == Role::Employer
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}
