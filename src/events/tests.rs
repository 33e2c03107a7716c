//! Tests for events module
//!
//! These tests verify core event functionality including:
//! - Active-only listing ordered by event date descending
//! - Request validation

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::migrations::run_migrations;
    use crate::common::Validator;
    use models::CreateEventRequest;
    use services::EventsService;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        run_migrations(&pool).await.expect("Failed to migrate");
        pool
    }

    fn sample_request(title: &str, event_date: &str) -> CreateEventRequest {
        CreateEventRequest {
            title: title.to_string(),
            description: "Launch party".to_string(),
            image_url: "/images/event.jpg".to_string(),
            event_date: event_date.to_string(),
            location: "Los Angeles, CA".to_string(),
            max_attendees: Some(200),
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_active_events_ordered_by_date() {
        let service = EventsService::new(test_pool().await);

        service
            .create_event(sample_request("Early", "2026-01-10T20:00:00Z"))
            .await
            .expect("create");
        service
            .create_event(sample_request("Late", "2026-06-10T20:00:00Z"))
            .await
            .expect("create");

        let mut hidden = sample_request("Cancelled", "2026-09-01T20:00:00Z");
        hidden.is_active = Some(false);
        service.create_event(hidden).await.expect("create");

        let events = service.get_active_events().await.expect("list");
        assert_eq!(events.len(), 2, "inactive events must be filtered out");
        assert_eq!(events[0].title, "Late", "latest event date comes first");
        assert_eq!(events[1].title, "Early");

        let all = service.get_events().await.expect("list all");
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_new_event_has_zero_attendees() {
        let service = EventsService::new(test_pool().await);

        let event = service
            .create_event(sample_request("Meetup", "2026-03-01T18:00:00Z"))
            .await
            .expect("create");

        assert_eq!(event.current_attendees, 0);
        assert_eq!(event.max_attendees, Some(200));
    }

    #[tokio::test]
    async fn test_get_event_absent() {
        let service = EventsService::new(test_pool().await);
        let event = service.get_event(7).await.expect("query");
        assert!(event.is_none());
    }

    #[test]
    fn test_create_event_validation_success() {
        let request = sample_request("Valid Event", "2026-03-01T18:00:00Z");
        let result = request.validate(&request);
        assert!(result.is_valid, "valid event should pass validation");
    }

    #[test]
    fn test_create_event_validation_bad_date() {
        let request = sample_request("Event", "sometime in march");
        let result = request.validate(&request);
        assert!(!result.is_valid, "unparseable event date should fail");
        assert!(result.errors.iter().any(|e| e.field == "eventDate"));
    }

    #[test]
    fn test_create_event_validation_empty_location() {
        let mut request = sample_request("Event", "2026-03-01T18:00:00Z");
        request.location = "  ".to_string();
        let result = request.validate(&request);
        assert!(!result.is_valid, "blank location should fail");
        assert!(result.errors.iter().any(|e| e.field == "location"));
    }
}
