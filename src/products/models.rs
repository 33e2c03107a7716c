use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::helpers::{serialize_int_to_bool, serialize_sizes};

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Decimal price, kept as a string on the wire
    pub price: String,
    pub image_url: String,
    /// Category drives client-side behavior; "clothing" requires a size
    /// selection before add-to-cart
    pub category: String,
    #[serde(serialize_with = "serialize_sizes")]
    pub sizes: Option<String>,
    pub stock: i64,
    #[serde(serialize_with = "serialize_int_to_bool")]
    pub is_active: i64,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub category: String,
    pub sizes: Option<Vec<String>>,
    pub stock: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ProductQueryParams {
    pub category: Option<String>,
}
