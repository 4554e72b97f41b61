//! Category → job role taxonomy.
//!
//! The category set is closed; every candidate's `job_role` must appear in the
//! role list of its category.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
    #[serde(rename = "Design")]
    Design,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Product")]
    Product,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Sales")]
    Sales,
    #[serde(rename = "Operations")]
    Operations,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Human Resources")]
    HumanResources,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::SoftwareDevelopment,
        Category::Design,
        Category::DataScience,
        Category::Product,
        Category::Marketing,
        Category::Sales,
        Category::Operations,
        Category::Finance,
        Category::HumanResources,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SoftwareDevelopment => "Software Development",
            Category::Design => "Design",
            Category::DataScience => "Data Science",
            Category::Product => "Product",
            Category::Marketing => "Marketing",
            Category::Sales => "Sales",
            Category::Operations => "Operations",
            Category::Finance => "Finance",
            Category::HumanResources => "Human Resources",
        }
    }

    /// Exact label lookup. Unknown labels return `None`.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == label)
    }

    pub fn roles(&self) -> &'static [&'static str] {
        match self {
            Category::SoftwareDevelopment => &[
                "Frontend Developer",
                "Backend Developer",
                "Full Stack Developer",
                "Mobile Developer",
                "DevOps Engineer",
            ],
            Category::Design => &[
                "UI/UX Designer",
                "Product Designer",
                "Graphic Designer",
                "Motion Designer",
            ],
            Category::DataScience => &[
                "Data Scientist",
                "Data Engineer",
                "ML Engineer",
                "Data Analyst",
            ],
            Category::Product => &["Product Manager", "Product Owner", "Technical PM"],
            Category::Marketing => &[
                "Marketing Manager",
                "Content Strategist",
                "SEO Specialist",
                "Growth Hacker",
            ],
            Category::Sales => &["Sales Manager", "Account Executive", "Business Development"],
            Category::Operations => &["Operations Manager", "Project Manager", "Scrum Master"],
            Category::Finance => &["Financial Analyst", "Accountant", "CFO"],
            Category::HumanResources => &["HR Manager", "Recruiter", "Talent Acquisition"],
        }
    }

    pub fn is_consistent(&self, role: &str) -> bool {
        self.roles().contains(&role)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyEntry {
    pub category: Category,
    pub roles: &'static [&'static str],
}

/// Role list for a category label. Unknown labels yield an empty slice.
pub fn roles_for(label: &str) -> &'static [&'static str] {
    Category::from_label(label)
        .map(|c| c.roles())
        .unwrap_or(&[])
}

pub fn taxonomy() -> Vec<TaxonomyEntry> {
    Category::ALL
        .into_iter()
        .map(|category| TaxonomyEntry {
            category,
            roles: category.roles(),
        })
        .collect()
}
