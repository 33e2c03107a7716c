use chrono::DateTime;

use super::models::CreateGiveawayRequest;
use crate::common::{ValidationResult, Validator};

impl Validator<CreateGiveawayRequest> for CreateGiveawayRequest {
    fn validate(&self, data: &CreateGiveawayRequest) -> ValidationResult {
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

        if data.value.trim().is_empty() {
            result.add_error("value", "Prize value is required");
        }

        if DateTime::parse_from_rfc3339(&data.end_date).is_err() {
            result.add_error("endDate", "End date must be an RFC 3339 timestamp");
        }

        result
    }
}
