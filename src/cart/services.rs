use sqlx::SqlitePool;
use tracing::info;

use super::models::{AddToCartRequest, CartItem};
use crate::common::ApiError;

pub struct CartService {
    db: SqlitePool,
}

impl CartService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get every cart row for a user
    pub async fn get_cart_items(&self, user_id: &str) -> Result<Vec<CartItem>, ApiError> {
        let items = sqlx::query_as::<_, CartItem>(
            r#"
            SELECT id, user_id, product_id, quantity, size, created_at
            FROM cart_items
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(items)
    }

    /// Add an item to a user's cart
    ///
    /// Every call inserts a fresh row, even for an identical
    /// (product, size) pair; quantities are never merged.
    pub async fn add_to_cart(
        &self,
        user_id: &str,
        request: AddToCartRequest,
    ) -> Result<CartItem, ApiError> {
        let quantity = request.quantity.unwrap_or(1);

        let result = sqlx::query(
            r#"
            INSERT INTO cart_items (user_id, product_id, quantity, size)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(request.product_id)
        .bind(quantity)
        .bind(&request.size)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let item_id = result.last_insert_rowid();

        info!(
            user_id = %user_id,
            product_id = request.product_id,
            "Added item to cart"
        );

        let item = sqlx::query_as::<_, CartItem>(
            "SELECT id, user_id, product_id, quantity, size, created_at FROM cart_items WHERE id = ?",
        )
        .bind(item_id)
        .fetch_one(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(item)
    }

    /// Remove every row for a (user, product) pair regardless of size
    pub async fn remove_from_cart(&self, user_id: &str, product_id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM cart_items WHERE user_id = ? AND product_id = ?")
            .bind(user_id)
            .bind(product_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(())
    }

    /// Remove every row in a user's cart
    pub async fn clear_cart(&self, user_id: &str) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(())
    }
}
