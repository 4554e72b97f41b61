// Candidate store: loading (fixture or Postgres) and the ordered read-only collection.

pub mod source;
pub mod store;
