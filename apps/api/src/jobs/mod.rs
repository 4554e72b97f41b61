// Job postings and applications, persisted in PostgreSQL.
// Handlers resolve the acting account, check role/ownership, then hit the repository.

pub mod handlers;
pub mod repository;
pub mod validation;
