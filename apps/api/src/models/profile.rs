use serde::{Deserialize, Serialize};

use crate::taxonomy::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub company: String,
    pub title: String,
    /// `YYYY-MM`, as entered.
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Job seeker profile. `category`/`job_role` follow the same taxonomy rule as
/// candidates: a role is only valid inside its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub title: String,
    pub location: String,
    pub about: String,
    pub skills: Vec<String>,
    pub experience: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub category: Option<Category>,
    pub job_role: Option<String>,
    /// Hidden profiles are not served publicly.
    pub visibility: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            about: String::new(),
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            projects: Vec::new(),
            category: None,
            job_role: None,
            visibility: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults_visible() {
        let p: Profile = serde_json::from_str(r#"{"title":"Engineer"}"#).unwrap();
        assert!(p.visibility);
        assert!(p.skills.is_empty());
        assert_eq!(p.category, None);
    }

    #[test]
    fn test_category_uses_display_label() {
        let p: Profile =
            serde_json::from_str(r#"{"category":"Data Science","job_role":"ML Engineer"}"#).unwrap();
        assert_eq!(p.category, Some(Category::DataScience));
    }
}
