use serde::{Deserialize, Serialize};

use crate::taxonomy::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "Immediate")]
    Immediate,
    #[serde(rename = "2 weeks")]
    TwoWeeks,
    #[serde(rename = "1 month")]
    OneMonth,
}

impl Availability {
    pub const ALL: [Availability; 3] = [
        Availability::Immediate,
        Availability::TwoWeeks,
        Availability::OneMonth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Immediate => "Immediate",
            Availability::TwoWeeks => "2 weeks",
            Availability::OneMonth => "1 month",
        }
    }

    pub fn from_label(label: &str) -> Option<Availability> {
        Availability::ALL.into_iter().find(|a| a.as_str() == label)
    }
}

/// A searchable candidate profile. Immutable once loaded into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub title: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Display priority order.
    pub skills: Vec<String>,
    pub experience: String,
    pub category: Category,
    pub job_role: String,
    pub availability: Availability,
    pub salary: String,
}
