// Application state shared across all modules

use reqwest::Client;
use sqlx::SqlitePool;
use std::collections::HashSet;

/// Identity provider endpoints and credentials
///
/// The provider is an external OAuth-style service; login and logout are
/// redirects to URLs it manages.
#[derive(Clone, Debug)]
pub struct AuthProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub redirect_uri: String,
}

/// Application state containing database pool, HTTP client, and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub http: Client,
    pub auth_provider: AuthProviderConfig,
    pub session_ttl_hours: i64,
    pub admin_emails: HashSet<String>,
}
