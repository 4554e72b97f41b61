//! Filter state and the per-facet predicates evaluated against each candidate.
//!
//! Every predicate is total: an unset facet imposes no constraint, an
//! unrecognised value simply matches nothing for that facet.

use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;
use crate::search::experience::{label_matches, ExperienceMatch};

/// UI sentinel for "All categories / roles / locations".
const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search_query: String,
    pub selected_category: Option<String>,
    /// Only meaningful alongside `selected_category`; evaluated regardless.
    pub selected_role: Option<String>,
    pub selected_location: Option<String>,
    /// OR-combined.
    pub selected_experience: Vec<String>,
    /// OR-combined.
    pub selected_availability: Vec<String>,
}

impl FilterState {
    /// The canonical empty state.
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn has_filters(&self) -> bool {
        !self.search_query.is_empty()
            || single_constraint(&self.selected_category).is_some()
            || single_constraint(&self.selected_role).is_some()
            || single_constraint(&self.selected_location).is_some()
            || !self.selected_experience.is_empty()
            || !self.selected_availability.is_empty()
    }

    /// Conjunction of every facet predicate.
    pub fn matches(&self, candidate: &Candidate, mode: ExperienceMatch) -> bool {
        matches_text(candidate, self)
            && matches_category(candidate, self)
            && matches_role(candidate, self)
            && matches_location(candidate, self)
            && matches_experience(candidate, self, mode)
            && matches_availability(candidate, self)
    }
}

/// `None` for unset, blank, or the "all" sentinel.
fn single_constraint(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL_SENTINEL))
}

pub fn matches_text(candidate: &Candidate, filters: &FilterState) -> bool {
    if filters.search_query.is_empty() {
        return true;
    }
    let query = filters.search_query.to_lowercase();
    candidate.name.to_lowercase().contains(&query)
        || candidate.title.to_lowercase().contains(&query)
        || candidate
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&query))
}

pub fn matches_category(candidate: &Candidate, filters: &FilterState) -> bool {
    single_constraint(&filters.selected_category)
        .map_or(true, |category| candidate.category.as_str() == category)
}

pub fn matches_role(candidate: &Candidate, filters: &FilterState) -> bool {
    single_constraint(&filters.selected_role).map_or(true, |role| candidate.job_role == role)
}

pub fn matches_location(candidate: &Candidate, filters: &FilterState) -> bool {
    single_constraint(&filters.selected_location)
        .map_or(true, |location| candidate.location == location)
}

pub fn matches_experience(
    candidate: &Candidate,
    filters: &FilterState,
    mode: ExperienceMatch,
) -> bool {
    filters.selected_experience.is_empty()
        || filters
            .selected_experience
            .iter()
            .any(|label| label_matches(label, &candidate.experience, mode))
}

pub fn matches_availability(candidate: &Candidate, filters: &FilterState) -> bool {
    filters.selected_availability.is_empty()
        || filters
            .selected_availability
            .iter()
            .any(|label| label == candidate.availability.as_str())
}
