//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::services::AuthService;
use crate::common::{safe_email_log, ApiError, AppState};

/// Name of the session cookie set by the login callback
pub const SESSION_COOKIE: &str = "sid";

/// Authenticated user extractor
///
/// Resolves the session cookie to an unexpired session row and its user.
/// Routes reading public catalog data never mention this type; user-scoped
/// routes get a 401 before any of their own code runs.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: String,
    pub email: Option<String>,
    pub is_admin: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InternalServer("cookie parsing failed".to_string()))?;

        let sid = match jar.get(SESSION_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => {
                warn!("Authentication failed: missing session cookie");
                return Err(ApiError::Unauthorized("Unauthorized".to_string()));
            }
        };

        let service = AuthService::new(app_state.db.clone());

        let session = match service.get_valid_session(&sid).await? {
            Some(s) => s,
            None => {
                warn!("Authentication failed: unknown or expired session");
                return Err(ApiError::Unauthorized("Unauthorized".to_string()));
            }
        };

        let user = match service.get_user(&session.user_id).await? {
            Some(u) => u,
            None => {
                warn!(user_id = %session.user_id, "Authentication failed: session user missing");
                return Err(ApiError::Unauthorized("Unauthorized".to_string()));
            }
        };

        let is_admin = user
            .email
            .as_deref()
            .map(|email| app_state.admin_emails.contains(&email.to_lowercase()))
            .unwrap_or(false);

        if let Some(email) = user.email.as_deref() {
            debug!(
                user_id = %user.id,
                email = %safe_email_log(email),
                is_admin = is_admin,
                "Session authentication successful"
            );
        }

        Ok(AuthedUser {
            id: user.id,
            email: user.email,
            is_admin,
        })
    }
}
