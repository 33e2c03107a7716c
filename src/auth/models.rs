//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model
///
/// The id is the identity provider's subject, so a row exists for every
/// account that has completed the login callback at least once.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Fields written on every login callback
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUser {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Session database model
#[derive(FromRow, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub sid: String,
    pub user_id: String,
    pub expire: String,
    pub created_at: Option<String>,
}

/// Token endpoint response from the identity provider
#[derive(Deserialize, Debug)]
pub struct ProviderTokenResponse {
    pub access_token: String,
}

/// Userinfo endpoint response from the identity provider
#[derive(Deserialize, Debug)]
pub struct ProviderUserInfo {
    pub sub: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

impl From<ProviderUserInfo> for UpsertUser {
    fn from(info: ProviderUserInfo) -> Self {
        UpsertUser {
            id: info.sub,
            email: info.email,
            first_name: info.first_name,
            last_name: info.last_name,
            profile_image_url: info.profile_image_url,
        }
    }
}
