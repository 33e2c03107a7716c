use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates the giveaways router with all giveaway-related routes
pub fn giveaways_routes() -> Router {
    Router::new()
        // Public routes
        .route("/api/giveaways", get(handlers::get_giveaways))
        .route("/api/giveaways/:id", get(handlers::get_giveaway_by_id))
        // Entry route (session required)
        .route("/api/giveaways/:id/enter", post(handlers::enter_giveaway))
        // Admin routes
        .route("/api/admin/giveaways", post(handlers::admin_create_giveaway))
}
