pub mod health;
pub mod taxonomy;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::accounts::handlers as accounts;
use crate::jobs::handlers as jobs;
use crate::saved::handlers as saved;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/taxonomy", get(taxonomy::taxonomy_handler))
        // Candidate search
        .route("/api/v1/candidates", get(search::handle_list_candidates))
        .route("/api/v1/candidates/:id", get(search::handle_get_candidate))
        .route("/api/v1/search/candidates", post(search::handle_search))
        .route("/api/v1/search/facets", get(search::handle_facets))
        .route(
            "/api/v1/search/filters/clear",
            get(search::handle_clear_filters),
        )
        // Saved candidates (employers)
        .route("/api/v1/saved", get(saved::handle_list_saved))
        .route(
            "/api/v1/saved/:candidate_id/toggle",
            post(saved::handle_toggle_saved),
        )
        // Accounts
        .route("/api/v1/me", get(accounts::handle_me))
        .route("/api/v1/me/profile", patch(accounts::handle_update_profile))
        .route("/api/v1/profiles/:id", get(accounts::handle_public_profile))
        .route(
            "/api/v1/admin/users",
            get(accounts::handle_list_users).post(accounts::handle_create_user),
        )
        .route(
            "/api/v1/admin/users/:id",
            patch(accounts::handle_update_user).delete(accounts::handle_delete_user),
        )
        .route(
            "/api/v1/admin/users/:id/toggle-status",
            post(accounts::handle_toggle_user_status),
        )
        // Jobs
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_get_job)
                .put(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        .route(
            "/api/v1/jobs/:id/applications",
            get(jobs::handle_list_applications).post(jobs::handle_apply),
        )
        .with_state(state)
}
