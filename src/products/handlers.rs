use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::models::{CreateProductRequest, ProductQueryParams};
use super::services::ProductsService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};

/// GET /api/products - List active products, optionally filtered by category
pub async fn get_products(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Query(params): Query<ProductQueryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = ProductsService::new(app_state.db.clone());

    let products = match params.category.as_deref() {
        Some(category) if !category.is_empty() => {
            service.get_products_by_category(category).await?
        }
        _ => service.get_products().await?,
    };

    debug!(
        count = products.len(),
        category = params.category.as_deref().unwrap_or("all"),
        "Loaded product catalog"
    );

    Ok(Json(products))
}

/// GET /api/products/:id - Get product by id
pub async fn get_product_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = ProductsService::new(app_state.db.clone());

    let product = service
        .get_product(product_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// POST /api/admin/products - Create a new product
pub async fn admin_create_product(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Json(request): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !user.is_admin {
        return Err(ApiError::Forbidden("Admin access required".to_string()));
    }

    let validation_result = request.validate(&request);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    let app_state = state.read().await;
    let service = ProductsService::new(app_state.db.clone());

    let product = service.create_product(request).await?;

    Ok((StatusCode::CREATED, Json(product)))
}
