use super::models::CreateProductRequest;
use crate::common::{ValidationResult, Validator};

impl Validator<CreateProductRequest> for CreateProductRequest {
    fn validate(&self, data: &CreateProductRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Name is required");
        } else if data.name.len() > 255 {
            result.add_error("name", "Name must be 255 characters or less");
        }

        if data.description.trim().is_empty() {
            result.add_error("description", "Description is required");
        }

        match data.price.parse::<f64>() {
            Ok(price) if price >= 0.0 => {}
            _ => result.add_error("price", "Price must be a non-negative decimal"),
        }

        if data.image_url.trim().is_empty() {
            result.add_error("imageUrl", "Image URL is required");
        }

        if data.category.trim().is_empty() {
            result.add_error("category", "Category is required");
        }

        if let Some(stock) = data.stock {
            if stock < 0 {
                result.add_error("stock", "Stock cannot be negative");
            }
        }

        result
    }
}
