//! Authentication routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /api/login` - Redirect to the identity provider
/// - `GET /api/callback` - Provider redirect target; sets the session cookie
/// - `GET /api/logout` - End the session
/// - `GET /api/auth/user` - Current user information
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/login", get(handlers::login))
        .route("/api/callback", get(handlers::callback))
        .route("/api/logout", get(handlers::logout))
        .route("/api/auth/user", get(handlers::get_current_user))
}
