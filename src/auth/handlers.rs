//! Authentication handlers
//!
//! Login and logout are redirects to URLs the external identity provider
//! manages; the callback exchanges the authorization code, upserts the
//! user row, and plants the session cookie.

use axum::{
    extract::{Extension, Query},
    response::{Json, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::extractors::{AuthedUser, SESSION_COOKIE};
use super::models::{ProviderTokenResponse, ProviderUserInfo, UpsertUser, User};
use super::services::AuthService;
use crate::common::{safe_email_log, ApiError, AppState};

/// GET /api/login - Start the provider login flow
/// Redirects the browser to the provider's authorization page
pub async fn login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Redirect, ApiError> {
    let state = state_lock.read().await.clone();
    let provider = &state.auth_provider;

    let auth_url = format!(
        "{}?client_id={}&redirect_uri={}&response_type=code&scope=openid%20email%20profile",
        provider.authorize_url,
        urlencoding::encode(&provider.client_id),
        urlencoding::encode(&provider.redirect_uri),
    );

    info!("Redirecting to identity provider for login");
    Ok(Redirect::to(&auth_url))
}

/// GET /api/callback - Handle the redirect back from the provider
///
/// Exchanges the authorization code for an access token, fetches the
/// user's claims, upserts the user row, creates a session, and sets the
/// session cookie before sending the browser home.
pub async fn callback(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(params): Query<HashMap<String, String>>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), ApiError> {
    let state = state_lock.read().await.clone();
    let provider = &state.auth_provider;

    if let Some(error) = params.get("error") {
        warn!(oauth_error = %error, "Identity provider returned an error");
        return Err(ApiError::BadRequest("Login was not completed".to_string()));
    }

    let code = params.get("code").ok_or_else(|| {
        warn!("No authorization code in login callback");
        ApiError::BadRequest("No authorization code provided".to_string())
    })?;

    debug!("Exchanging authorization code at provider token endpoint");

    let token_form = [
        ("grant_type", "authorization_code"),
        ("code", code.as_str()),
        ("client_id", provider.client_id.as_str()),
        ("client_secret", provider.client_secret.as_str()),
        ("redirect_uri", provider.redirect_uri.as_str()),
    ];

    let token_resp = state
        .http
        .post(&provider.token_url)
        .form(&token_form)
        .send()
        .await
        .map_err(|e| {
            error!(error = %e, "HTTP error contacting provider token endpoint");
            ApiError::InternalServer("Identity provider unavailable".to_string())
        })?;

    if !token_resp.status().is_success() {
        warn!(http_status = %token_resp.status(), "Token exchange rejected by provider");
        return Err(ApiError::BadRequest(
            "Authorization code was not accepted".to_string(),
        ));
    }

    let token: ProviderTokenResponse = token_resp.json().await.map_err(|e| {
        error!(error = %e, "Failed to parse provider token response");
        ApiError::InternalServer("Identity provider unavailable".to_string())
    })?;

    debug!("Fetching user claims from provider userinfo endpoint");

    let userinfo_resp = state
        .http
        .get(&provider.userinfo_url)
        .bearer_auth(&token.access_token)
        .send()
        .await
        .map_err(|e| {
            error!(error = %e, "HTTP error contacting provider userinfo endpoint");
            ApiError::InternalServer("Identity provider unavailable".to_string())
        })?;

    if !userinfo_resp.status().is_success() {
        warn!(http_status = %userinfo_resp.status(), "Userinfo request rejected by provider");
        return Err(ApiError::BadRequest(
            "Login session could not be established".to_string(),
        ));
    }

    let claims: ProviderUserInfo = userinfo_resp.json().await.map_err(|e| {
        error!(error = %e, "Failed to parse provider userinfo response");
        ApiError::InternalServer("Identity provider unavailable".to_string())
    })?;

    let service = AuthService::new(state.db.clone());

    let user = service.upsert_user(UpsertUser::from(claims)).await?;
    let session = service
        .create_session(&user.id, state.session_ttl_hours)
        .await?;

    if let Some(email) = user.email.as_deref() {
        info!(
            user_id = %user.id,
            email = %safe_email_log(email),
            "User login successful"
        );
    }

    let cookie = Cookie::build((SESSION_COOKIE, session.sid))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), Redirect::to("/")))
}

/// GET /api/logout - End the session and clear the cookie
pub async fn logout(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), ApiError> {
    let state = state_lock.read().await.clone();

    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let service = AuthService::new(state.db.clone());
        service.delete_session(cookie.value()).await?;
        info!("User logout successful");
    }

    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();

    Ok((jar.remove(removal), Redirect::to("/")))
}

/// GET /api/auth/user - Return the current authenticated user
pub async fn get_current_user(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<User>, ApiError> {
    let state = state_lock.read().await.clone();
    let service = AuthService::new(state.db.clone());

    let user = service
        .get_user(&authed.id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;

    Ok(Json(user))
}
