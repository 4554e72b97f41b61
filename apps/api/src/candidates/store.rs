use std::collections::HashSet;

use thiserror::Error;

use crate::models::candidate::Candidate;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("duplicate candidate id '{0}'")]
    DuplicateId(String),

    #[error("candidate '{id}' has role '{role}' which is not part of category '{category}'")]
    InconsistentRole {
        id: String,
        category: String,
        role: String,
    },

    #[error("candidate at position {0} has an empty id")]
    EmptyId(usize),
}

/// Ordered, read-only collection of candidates. Insertion order is the
/// canonical display order for every search result.
#[derive(Debug, Clone, Default)]
pub struct CandidateStore {
    candidates: Vec<Candidate>,
}

impl CandidateStore {
    /// Builds a store, rejecting duplicate ids and category/role mismatches.
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(candidates.len());
        for (position, candidate) in candidates.iter().enumerate() {
            if candidate.id.trim().is_empty() {
                return Err(StoreError::EmptyId(position));
            }
            if !seen.insert(candidate.id.as_str()) {
                return Err(StoreError::DuplicateId(candidate.id.clone()));
            }
            if !candidate.category.is_consistent(&candidate.job_role) {
                return Err(StoreError::InconsistentRole {
                    id: candidate.id.clone(),
                    category: candidate.category.to_string(),
                    role: candidate.job_role.clone(),
                });
            }
        }
        Ok(Self { candidates })
    }

    pub fn all(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Distinct locations in first-seen order.
    pub fn locations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.candidates
            .iter()
            .map(|c| c.location.as_str())
            .filter(|loc| seen.insert(*loc))
            .collect()
    }
}
