// Saved-candidate membership: pure index functions plus the employer-facing endpoints.

pub mod handlers;
pub mod index;
