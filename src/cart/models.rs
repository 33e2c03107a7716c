use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub user_id: String,
    pub product_id: i64,
    pub quantity: i64,
    pub size: Option<String>,
    pub created_at: Option<String>,
}

/// Body for POST /api/cart; the user comes from the session, never the body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: i64,
    pub quantity: Option<i64>,
    pub size: Option<String>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
