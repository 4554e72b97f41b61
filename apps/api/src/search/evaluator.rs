use tracing::debug;

use crate::candidates::store::CandidateStore;
use crate::models::candidate::Candidate;
use crate::search::experience::ExperienceMatch;
use crate::search::filter::FilterState;

/// Stable filter over the store: every candidate for which all facet
/// predicates hold, in store order. Recomputed in full on every call.
pub fn evaluate<'a>(
    store: &'a CandidateStore,
    filters: &FilterState,
    mode: ExperienceMatch,
) -> Vec<&'a Candidate> {
    let results: Vec<&Candidate> = store
        .all()
        .iter()
        .filter(|candidate| filters.matches(candidate, mode))
        .collect();
    debug!(
        matched = results.len(),
        total = store.len(),
        "evaluated candidate filters"
    );
    results
}
