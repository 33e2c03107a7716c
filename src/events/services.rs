use sqlx::SqlitePool;
use tracing::info;

use super::models::{CreateEventRequest, Event};
use crate::common::ApiError;

pub struct EventsService {
    db: SqlitePool,
}

impl EventsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get active events, latest event date first
    pub async fn get_active_events(&self) -> Result<Vec<Event>, ApiError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, image_url, event_date, location,
                   max_attendees, current_attendees, is_active, created_at
            FROM events
            WHERE is_active = 1
            ORDER BY event_date DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(events)
    }

    /// Get every event regardless of active flag, latest event date first
    pub async fn get_events(&self) -> Result<Vec<Event>, ApiError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, image_url, event_date, location,
                   max_attendees, current_attendees, is_active, created_at
            FROM events
            ORDER BY event_date DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(events)
    }

    /// Get event by id
    pub async fn get_event(&self, id: i64) -> Result<Option<Event>, ApiError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, image_url, event_date, location,
                   max_attendees, current_attendees, is_active, created_at
            FROM events
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(event)
    }

    /// Create a new event
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event, ApiError> {
        let is_active = request.is_active.unwrap_or(true) as i64;

        let result = sqlx::query(
            r#"
            INSERT INTO events (title, description, image_url, event_date, location, max_attendees, is_active)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.image_url)
        .bind(&request.event_date)
        .bind(&request.location)
        .bind(request.max_attendees)
        .bind(is_active)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let event_id = result.last_insert_rowid();

        info!(
            event_id = event_id,
            title = %request.title,
            "Created event"
        );

        self.get_event(event_id).await?.ok_or_else(|| {
            ApiError::InternalServer("Created event could not be read back".to_string())
        })
    }
}
