use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::models::{AddToCartRequest, MessageResponse};
use super::services::CartService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};

/// GET /api/cart - List the current user's cart rows
pub async fn get_cart(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CartService::new(app_state.db.clone());

    let items = service.get_cart_items(&user.id).await?;

    debug!(user_id = %user.id, count = items.len(), "Loaded cart");

    Ok(Json(items))
}

/// POST /api/cart - Add an item to the current user's cart
pub async fn add_to_cart(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Json(request): Json<AddToCartRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let validation_result = request.validate(&request);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    let app_state = state.read().await;
    let service = CartService::new(app_state.db.clone());

    let item = service.add_to_cart(&user.id, request).await?;

    Ok(Json(item))
}

/// DELETE /api/cart/:productId - Remove a product from the cart (all sizes)
pub async fn remove_from_cart(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CartService::new(app_state.db.clone());

    service.remove_from_cart(&user.id, product_id).await?;

    Ok(Json(MessageResponse {
        message: "Item removed from cart".to_string(),
    }))
}

/// DELETE /api/cart - Clear the current user's cart
pub async fn clear_cart(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CartService::new(app_state.db.clone());

    service.clear_cart(&user.id).await?;

    Ok(Json(MessageResponse {
        message: "Cart cleared".to_string(),
    }))
}
