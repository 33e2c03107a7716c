use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates the products router with all product-related routes
pub fn products_routes() -> Router {
    Router::new()
        // Public routes
        .route("/api/products", get(handlers::get_products))
        .route("/api/products/:id", get(handlers::get_product_by_id))
        // Admin routes
        .route("/api/admin/products", post(handlers::admin_create_product))
}
