use sqlx::SqlitePool;
use tracing::info;

use super::models::{CreateProductRequest, Product};
use crate::common::ApiError;

pub struct ProductsService {
    db: SqlitePool,
}

impl ProductsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get active products
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, image_url, category, sizes, stock,
                   is_active, created_at
            FROM products
            WHERE is_active = 1
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(products)
    }

    /// Get active products within a category
    pub async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, ApiError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, image_url, category, sizes, stock,
                   is_active, created_at
            FROM products
            WHERE category = ? AND is_active = 1
            "#,
        )
        .bind(category)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(products)
    }

    /// Get product by id
    pub async fn get_product(&self, id: i64) -> Result<Option<Product>, ApiError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, image_url, category, sizes, stock,
                   is_active, created_at
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(product)
    }

    /// Create a new product
    pub async fn create_product(&self, request: CreateProductRequest) -> Result<Product, ApiError> {
        let sizes_json = request
            .sizes
            .as_ref()
            .map(|s| serde_json::to_string(s).unwrap_or_else(|_| "[]".to_string()));
        let stock = request.stock.unwrap_or(0);
        let is_active = request.is_active.unwrap_or(true) as i64;

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, image_url, category, sizes, stock, is_active)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.price)
        .bind(&request.image_url)
        .bind(&request.category)
        .bind(sizes_json.as_deref())
        .bind(stock)
        .bind(is_active)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let product_id = result.last_insert_rowid();

        info!(
            product_id = product_id,
            name = %request.name,
            category = %request.category,
            "Created product"
        );

        self.get_product(product_id).await?.ok_or_else(|| {
            ApiError::InternalServer("Created product could not be read back".to_string())
        })
    }
}
