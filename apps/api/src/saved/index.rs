//! Saved-candidate membership for employer accounts.
//!
//! Both operations are pure functions of the account value passed in.
//! `toggle` is the only mutator and is self-inverse.

use serde::Serialize;

use crate::candidates::store::CandidateStore;
use crate::models::account::Account;
use crate::models::candidate::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Saved,
    Removed,
    /// Account is not an employer; nothing changed.
    Ignored,
}

impl ToggleOutcome {
    /// Membership after the toggle, if the toggle applied.
    pub fn is_saved(&self) -> Option<bool> {
        match self {
            ToggleOutcome::Saved => Some(true),
            ToggleOutcome::Removed => Some(false),
            ToggleOutcome::Ignored => None,
        }
    }
}

pub fn is_saved(account: &Account, candidate_id: &str) -> bool {
    account.is_employer() && account.saved_candidates.contains(candidate_id)
}

/// Flips membership of `candidate_id`. Non-employer accounts come back unchanged.
pub fn toggle(mut account: Account, candidate_id: &str) -> (Account, ToggleOutcome) {
    if !account.is_employer() {
        return (account, ToggleOutcome::Ignored);
    }
    let outcome = if account.saved_candidates.remove(candidate_id) {
        ToggleOutcome::Removed
    } else {
        account.saved_candidates.insert(candidate_id.to_string());
        ToggleOutcome::Saved
    };
    (account, outcome)
}

/// Saved candidates in store order.
pub fn saved_candidates<'a>(store: &'a CandidateStore, account: &Account) -> Vec<&'a Candidate> {
    store
        .all()
        .iter()
        .filter(|c| is_saved(account, &c.id))
        .collect()
}
