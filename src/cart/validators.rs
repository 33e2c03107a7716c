use super::models::AddToCartRequest;
use crate::common::{ValidationResult, Validator};

impl Validator<AddToCartRequest> for AddToCartRequest {
    fn validate(&self, data: &AddToCartRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.product_id <= 0 {
            result.add_error("productId", "Product id must be positive");
        }

        if let Some(quantity) = data.quantity {
            if quantity < 1 {
                result.add_error("quantity", "Quantity must be at least 1");
            }
        }

        result
    }
}
