use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates the events router with all event-related routes
pub fn events_routes() -> Router {
    Router::new()
        // Public routes
        .route("/api/events", get(handlers::get_events))
        .route("/api/events/:id", get(handlers::get_event_by_id))
        // Admin routes
        .route("/api/admin/events", post(handlers::admin_create_event))
}
