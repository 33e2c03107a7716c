use chrono::DateTime;

use super::models::CreateEventRequest;
use crate::common::{ValidationResult, Validator};

impl Validator<CreateEventRequest> for CreateEventRequest {
    fn validate(&self, data: &CreateEventRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        } else if data.title.len() > 255 {
            result.add_error("title", "Title must be 255 characters or less");
        }

        if data.description.trim().is_empty() {
            result.add_error("description", "Description is required");
        }

        if data.image_url.trim().is_empty() {
            result.add_error("imageUrl", "Image URL is required");
        }

        if DateTime::parse_from_rfc3339(&data.event_date).is_err() {
            result.add_error("eventDate", "Event date must be an RFC 3339 timestamp");
        }

        if data.location.trim().is_empty() {
            result.add_error("location", "Location is required");
        }

        if let Some(max_attendees) = data.max_attendees {
            if max_attendees < 0 {
                result.add_error("maxAttendees", "Max attendees cannot be negative");
            }
        }

        result
    }
}
