// Candidate search: facet predicates, the stable evaluator, facet options,
// and the HTTP endpoints that expose them.

pub mod evaluator;
pub mod experience;
pub mod facets;
pub mod filter;
pub mod handlers;
