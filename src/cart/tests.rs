//! Tests for cart module
//!
//! These tests verify the documented cart semantics:
//! - Repeated adds create duplicate rows, quantities are never merged
//! - Removal deletes all rows for a (user, product) pair across sizes
//! - Carts are scoped per user

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::auth::models::UpsertUser;
    use crate::auth::AuthService;
    use crate::common::migrations::run_migrations;
    use crate::common::Validator;
    use crate::products::models::CreateProductRequest;
    use crate::products::services::ProductsService;
    use models::AddToCartRequest;
    use services::CartService;
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

    async fn seed_user(pool: &SqlitePool, id: &str) {
        AuthService::new(pool.clone())
            .upsert_user(UpsertUser {
                id: id.to_string(),
                email: Some(format!("{}@example.com", id)),
                first_name: None,
                last_name: None,
                profile_image_url: None,
            })
            .await
            .expect("Failed to seed user");
    }

    async fn seed_product(pool: &SqlitePool, name: &str) -> i64 {
        ProductsService::new(pool.clone())
            .create_product(CreateProductRequest {
                name: name.to_string(),
                description: "Premium gaming merch".to_string(),
                price: "99.00".to_string(),
                image_url: "/images/product.jpg".to_string(),
                category: "clothing".to_string(),
                sizes: Some(vec!["S".to_string(), "M".to_string()]),
                stock: Some(5),
                is_active: None,
            })
            .await
            .expect("Failed to seed product")
            .id
    }

    fn add_request(product_id: i64, size: Option<&str>) -> AddToCartRequest {
        AddToCartRequest {
            product_id,
            quantity: None,
            size: size.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_repeated_adds_create_duplicate_rows() {
        let pool = test_pool().await;
        seed_user(&pool, "sub-1").await;
        let product_id = seed_product(&pool, "Hoodie").await;
        let service = CartService::new(pool);

        let first = service
            .add_to_cart("sub-1", add_request(product_id, Some("M")))
            .await
            .expect("first add");
        let second = service
            .add_to_cart("sub-1", add_request(product_id, Some("M")))
            .await
            .expect("second add");

        assert_ne!(first.id, second.id, "each add inserts a distinct row");

        let items = service.get_cart_items("sub-1").await.expect("list");
        assert_eq!(items.len(), 2);
        // Quantities stay independent rather than summing to 2 on one row
        assert!(items.iter().all(|i| i.quantity == 1));
    }

    #[tokio::test]
    async fn test_remove_deletes_all_sizes() {
        let pool = test_pool().await;
        seed_user(&pool, "sub-1").await;
        let hoodie = seed_product(&pool, "Hoodie").await;
        let tee = seed_product(&pool, "Tee").await;
        let service = CartService::new(pool);

        service
            .add_to_cart("sub-1", add_request(hoodie, Some("S")))
            .await
            .expect("add");
        service
            .add_to_cart("sub-1", add_request(hoodie, Some("M")))
            .await
            .expect("add");
        service
            .add_to_cart("sub-1", add_request(tee, None))
            .await
            .expect("add");

        service
            .remove_from_cart("sub-1", hoodie)
            .await
            .expect("remove");

        let items = service.get_cart_items("sub-1").await.expect("list");
        assert_eq!(items.len(), 1, "both hoodie sizes must be gone");
        assert_eq!(items[0].product_id, tee);
    }

    #[tokio::test]
    async fn test_clear_cart() {
        let pool = test_pool().await;
        seed_user(&pool, "sub-1").await;
        let product_id = seed_product(&pool, "Hoodie").await;
        let service = CartService::new(pool);

        service
            .add_to_cart("sub-1", add_request(product_id, Some("S")))
            .await
            .expect("add");
        service
            .add_to_cart("sub-1", add_request(product_id, None))
            .await
            .expect("add");

        service.clear_cart("sub-1").await.expect("clear");

        let items = service.get_cart_items("sub-1").await.expect("list");
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_cart_is_per_user() {
        let pool = test_pool().await;
        seed_user(&pool, "sub-1").await;
        seed_user(&pool, "sub-2").await;
        let product_id = seed_product(&pool, "Hoodie").await;
        let service = CartService::new(pool);

        service
            .add_to_cart("sub-1", add_request(product_id, None))
            .await
            .expect("add");

        let other = service.get_cart_items("sub-2").await.expect("list");
        assert!(other.is_empty(), "carts must not leak across users");

        // Removing from the other user's cart leaves the row alone
        service
            .remove_from_cart("sub-2", product_id)
            .await
            .expect("remove");
        let items = service.get_cart_items("sub-1").await.expect("list");
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_quantity_defaults_to_one() {
        let pool = test_pool().await;
        seed_user(&pool, "sub-1").await;
        let product_id = seed_product(&pool, "Hoodie").await;
        let service = CartService::new(pool);

        let item = service
            .add_to_cart("sub-1", add_request(product_id, None))
            .await
            .expect("add");
        assert_eq!(item.quantity, 1);

        let explicit = service
            .add_to_cart(
                "sub-1",
                AddToCartRequest {
                    product_id,
                    quantity: Some(3),
                    size: None,
                },
            )
            .await
            .expect("add");
        assert_eq!(explicit.quantity, 3);
    }

    #[test]
    fn test_add_to_cart_validation() {
        let valid = AddToCartRequest {
            product_id: 1,
            quantity: Some(2),
            size: Some("M".to_string()),
        };
        assert!(valid.validate(&valid).is_valid);

        let bad_product = AddToCartRequest {
            product_id: 0,
            quantity: None,
            size: None,
        };
        let result = bad_product.validate(&bad_product);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "productId"));

        let bad_quantity = AddToCartRequest {
            product_id: 1,
            quantity: Some(0),
            size: None,
        };
        let result = bad_quantity.validate(&bad_quantity);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "quantity"));
    }
}
