use serde::Serialize;

use crate::candidates::store::CandidateStore;
use crate::models::candidate::Availability;
use crate::search::experience::EXPERIENCE_LEVELS;
use crate::taxonomy::{roles_for, Category};

/// Options available to each filter facet.
#[derive(Debug, Clone, Serialize)]
pub struct FacetOptions {
    pub categories: Vec<&'static str>,
    /// Roles of the selected category; empty when no category is selected.
    pub roles: Vec<&'static str>,
    pub locations: Vec<String>,
    pub experience_levels: Vec<&'static str>,
    pub availability: Vec<&'static str>,
}

pub fn facet_options(store: &CandidateStore, selected_category: Option<&str>) -> FacetOptions {
    FacetOptions {
        categories: Category::ALL.iter().map(|c| c.as_str()).collect(),
        roles: selected_category.map(roles_for).unwrap_or_default().to_vec(),
        locations: store.locations().into_iter().map(str::to_string).collect(),
        experience_levels: EXPERIENCE_LEVELS.to_vec(),
        availability: Availability::ALL.iter().map(|a| a.as_str()).collect(),
    }
}
