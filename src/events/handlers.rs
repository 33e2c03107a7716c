use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::models::CreateEventRequest;
use super::services::EventsService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};

/// GET /api/events - List active events, latest first
pub async fn get_events(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = EventsService::new(app_state.db.clone());

    let events = service.get_active_events().await?;

    debug!(count = events.len(), "Loaded active events");

    Ok(Json(events))
}

/// GET /api/events/:id - Get event by id
pub async fn get_event_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(event_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = EventsService::new(app_state.db.clone());

    let event = service
        .get_event(event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    Ok(Json(event))
}

/// POST /api/admin/events - Create a new event
pub async fn admin_create_event(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Json(request): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !user.is_admin {
        return Err(ApiError::Forbidden("Admin access required".to_string()));
    }

    let validation_result = request.validate(&request);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    let app_state = state.read().await;
    let service = EventsService::new(app_state.db.clone());

    let event = service.create_event(request).await?;

    Ok((StatusCode::CREATED, Json(event)))
}
