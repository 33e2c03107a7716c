//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Login/logout redirects against the external identity provider
//! - Session storage and the session cookie
//! - User upsert on login callback
//! - AuthedUser extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use models::User;
pub use routes::auth_routes;
pub use services::AuthService;
