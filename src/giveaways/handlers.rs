use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::models::CreateGiveawayRequest;
use super::services::GiveawaysService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};

/// GET /api/giveaways - List active giveaways, newest first
pub async fn get_giveaways(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = GiveawaysService::new(app_state.db.clone());

    let giveaways = service.get_active_giveaways().await?;

    debug!(count = giveaways.len(), "Loaded active giveaways");

    Ok(Json(giveaways))
}

/// GET /api/giveaways/:id - Get giveaway by id
pub async fn get_giveaway_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(giveaway_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = GiveawaysService::new(app_state.db.clone());

    let giveaway = service
        .get_giveaway(giveaway_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Giveaway not found".to_string()))?;

    Ok(Json(giveaway))
}

/// POST /api/giveaways/:id/enter - Enter the current user into a giveaway
pub async fn enter_giveaway(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Path(giveaway_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = GiveawaysService::new(app_state.db.clone());

    service
        .get_giveaway(giveaway_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Giveaway not found".to_string()))?;

    // Existence pre-check shapes the duplicate answer; the unique
    // constraint underneath closes the race between check and insert.
    if service
        .get_user_giveaway_entry(&user.id, giveaway_id)
        .await?
        .is_some()
    {
        return Err(ApiError::AlreadyExists(
            "Already entered this giveaway".to_string(),
        ));
    }

    let entry = service.enter_giveaway(&user.id, giveaway_id).await?;

    Ok(Json(entry))
}

/// POST /api/admin/giveaways - Create a new giveaway
pub async fn admin_create_giveaway(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Json(request): Json<CreateGiveawayRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !user.is_admin {
        return Err(ApiError::Forbidden("Admin access required".to_string()));
    }

    let validation_result = request.validate(&request);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    let app_state = state.read().await;
    let service = GiveawaysService::new(app_state.db.clone());

    let giveaway = service.create_giveaway(request).await?;

    Ok((StatusCode::CREATED, Json(giveaway)))
}
