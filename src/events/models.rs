use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::helpers::serialize_int_to_bool;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub event_date: String,
    pub location: String,
    pub max_attendees: Option<i64>,
    /// Declared counter; no route mutates it because there is no attend
    /// operation in the API surface
    pub current_attendees: i64,
    #[serde(serialize_with = "serialize_int_to_bool")]
    pub is_active: i64,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub event_date: String,
    pub location: String,
    pub max_attendees: Option<i64>,
    pub is_active: Option<bool>,
}
