use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers;

/// Creates the cart router with all cart-related routes
///
/// Every route here is user-scoped and requires a valid session.
pub fn cart_routes() -> Router {
    Router::new()
        .route(
            "/api/cart",
            get(handlers::get_cart)
                .post(handlers::add_to_cart)
                .delete(handlers::clear_cart),
        )
        .route("/api/cart/:productId", delete(handlers::remove_from_cart))
}
