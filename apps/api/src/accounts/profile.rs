//! Job seeker profile edits and the public profile view.
//!
//! An update is merged over the stored profile field by field; absent fields
//! keep their value. The merged profile is validated as a whole, so a category
//! change must come with a role from the new category.

use serde::{Deserialize, Serialize};

use crate::accounts::directory::DirectoryError;
use crate::models::account::{Account, Role};
use crate::models::profile::{EducationEntry, Profile, ProjectEntry, WorkEntry};
use crate::taxonomy::Category;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub title: Option<String>,
    pub location: Option<String>,
    pub about: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<WorkEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub certifications: Option<Vec<String>>,
    pub projects: Option<Vec<ProjectEntry>>,
    pub category: Option<Category>,
    pub job_role: Option<String>,
    pub visibility: Option<bool>,
}

/// What anyone may see of a visible job seeker profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: Profile,
}

pub fn apply_update(current: Profile, update: ProfileUpdate) -> Result<Profile, DirectoryError> {
    let mut profile = current;

    if let Some(title) = update.title {
        profile.title = title.trim().to_string();
    }
    if let Some(location) = update.location {
        profile.location = location.trim().to_string();
    }
    if let Some(about) = update.about {
        profile.about = about.trim().to_string();
    }
    if let Some(skills) = update.skills {
        profile.skills = normalize_list(skills);
    }
    if let Some(certifications) = update.certifications {
        profile.certifications = normalize_list(certifications);
    }
    if let Some(experience) = update.experience {
        profile.experience = experience;
    }
    if let Some(education) = update.education {
        profile.education = education;
    }
    if let Some(projects) = update.projects {
        profile.projects = projects;
    }
    if let Some(category) = update.category {
        profile.category = Some(category);
    }
    if let Some(job_role) = update.job_role {
        let job_role = job_role.trim().to_string();
        profile.job_role = (!job_role.is_empty()).then_some(job_role);
    }
    if let Some(visibility) = update.visibility {
        profile.visibility = visibility;
    }

    validate(&profile)?;
    Ok(profile)
}

fn validate(profile: &Profile) -> Result<(), DirectoryError> {
    if let Some(role) = &profile.job_role {
        match profile.category {
            None => {
                return Err(DirectoryError::InvalidField(
                    "job_role requires a category".to_string(),
                ))
            }
            Some(category) if !category.is_consistent(role) => {
                return Err(DirectoryError::InvalidField(format!(
                    "job_role '{role}' is not part of category '{category}'"
                )))
            }
            Some(_) => {}
        }
    }

    for entry in &profile.experience {
        if entry.company.trim().is_empty() || entry.title.trim().is_empty() {
            return Err(DirectoryError::InvalidField(
                "experience entries need a company and a title".to_string(),
            ));
        }
        if entry.current && entry.end_date.is_some() {
            return Err(DirectoryError::InvalidField(format!(
                "current position at '{}' cannot have an end date",
                entry.company
            )));
        }
    }
    if profile
        .education
        .iter()
        .any(|e| e.institution.trim().is_empty() || e.degree.trim().is_empty())
    {
        return Err(DirectoryError::InvalidField(
            "education entries need an institution and a degree".to_string(),
        ));
    }
    if profile.projects.iter().any(|p| p.name.trim().is_empty()) {
        return Err(DirectoryError::InvalidField(
            "projects need a name".to_string(),
        ));
    }
    Ok(())
}

/// Trims, drops blanks and exact duplicates, keeping first-seen order.
fn normalize_list(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim();
        if !item.is_empty() && !out.iter().any(|s| s == item) {
            out.push(item.to_string());
        }
    }
    out
}

/// `None` unless the account is an active job seeker with a visible profile.
pub fn public_profile(account: &Account) -> Option<PublicProfile> {
    if account.role != Role::JobSeeker || !account.is_active() {
        return None;
    }
    let profile = account.profile.as_ref().filter(|p| p.visibility)?;
    Some(PublicProfile {
        id: account.id.clone(),
        name: account.name.clone(),
        email: account.email.clone(),
        profile: profile.clone(),
    })
}
