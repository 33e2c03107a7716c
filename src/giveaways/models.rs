use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::helpers::serialize_int_to_bool;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Giveaway {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Prize value, kept as a display string on the wire
    pub value: String,
    pub end_date: String,
    pub entry_count: i64,
    #[serde(serialize_with = "serialize_int_to_bool")]
    pub is_active: i64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayEntry {
    pub id: i64,
    pub user_id: String,
    pub giveaway_id: i64,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiveawayRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub value: String,
    pub end_date: String,
    pub is_active: Option<bool>,
}
