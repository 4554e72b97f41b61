use axum::Json;

use crate::taxonomy::{taxonomy, TaxonomyEntry};

/// GET /api/v1/taxonomy
pub async fn taxonomy_handler() -> Json<Vec<TaxonomyEntry>> {
    Json(taxonomy())
}
