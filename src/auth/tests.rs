//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Session creation, lookup, expiry, and deletion
//! - User upsert semantics on login callback
//! - Model structure

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::migrations::run_migrations;
    use models::UpsertUser;
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

    fn sample_upsert(id: &str, email: &str) -> UpsertUser {
        UpsertUser {
            id: id.to_string(),
            email: Some(email.to_string()),
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            profile_image_url: None,
        }
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_updates() {
        let service = AuthService::new(test_pool().await);

        let created = service
            .upsert_user(sample_upsert("sub-1", "first@example.com"))
            .await
            .expect("insert");
        assert_eq!(created.id, "sub-1");
        assert_eq!(created.email.as_deref(), Some("first@example.com"));

        // Second callback for the same subject updates in place
        let updated = service
            .upsert_user(sample_upsert("sub-1", "second@example.com"))
            .await
            .expect("update");
        assert_eq!(updated.id, "sub-1");
        assert_eq!(updated.email.as_deref(), Some("second@example.com"));

        let fetched = service.get_user("sub-1").await.expect("get").expect("row");
        assert_eq!(fetched.email.as_deref(), Some("second@example.com"));
    }

    #[tokio::test]
    async fn test_get_user_absent() {
        let service = AuthService::new(test_pool().await);
        let user = service.get_user("nobody").await.expect("query");
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_session_roundtrip() {
        let service = AuthService::new(test_pool().await);
        service
            .upsert_user(sample_upsert("sub-1", "user@example.com"))
            .await
            .expect("user");

        let session = service.create_session("sub-1", 24).await.expect("create");
        assert_eq!(session.user_id, "sub-1");
        assert_eq!(session.sid.len(), 32);

        let found = service
            .get_valid_session(&session.sid)
            .await
            .expect("lookup")
            .expect("session should be valid");
        assert_eq!(found.user_id, "sub-1");
    }

    #[tokio::test]
    async fn test_expired_session_is_invalid() {
        let service = AuthService::new(test_pool().await);
        service
            .upsert_user(sample_upsert("sub-1", "user@example.com"))
            .await
            .expect("user");

        // Negative TTL puts the expiry in the past
        let session = service.create_session("sub-1", -1).await.expect("create");

        let found = service
            .get_valid_session(&session.sid)
            .await
            .expect("lookup");
        assert!(found.is_none(), "expired session must not authenticate");
    }

    #[tokio::test]
    async fn test_delete_session() {
        let service = AuthService::new(test_pool().await);
        service
            .upsert_user(sample_upsert("sub-1", "user@example.com"))
            .await
            .expect("user");

        let session = service.create_session("sub-1", 24).await.expect("create");
        service.delete_session(&session.sid).await.expect("delete");

        let found = service
            .get_valid_session(&session.sid)
            .await
            .expect("lookup");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_purge_expired_sessions() {
        let service = AuthService::new(test_pool().await);
        service
            .upsert_user(sample_upsert("sub-1", "user@example.com"))
            .await
            .expect("user");

        let live = service.create_session("sub-1", 24).await.expect("live");
        service.create_session("sub-1", -1).await.expect("expired");
        service.create_session("sub-1", -2).await.expect("expired");

        let purged = service.purge_expired_sessions().await.expect("purge");
        assert_eq!(purged, 2);

        let found = service.get_valid_session(&live.sid).await.expect("lookup");
        assert!(found.is_some(), "live session must survive the sweep");
    }

    #[test]
    fn test_user_model_structure() {
        let user = models::User {
            id: "sub-123".to_string(),
            email: Some("test@example.com".to_string()),
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            profile_image_url: Some("https://example.com/avatar.jpg".to_string()),
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
            updated_at: Some("2024-01-01T00:00:00Z".to_string()),
        };

        assert_eq!(user.id, "sub-123");
        assert_eq!(user.email, Some("test@example.com".to_string()));
    }

    #[test]
    fn test_userinfo_to_upsert_conversion() {
        let info = models::ProviderUserInfo {
            sub: "sub-9".to_string(),
            email: Some("claims@example.com".to_string()),
            first_name: None,
            last_name: None,
            profile_image_url: None,
        };

        let upsert = models::UpsertUser::from(info);
        assert_eq!(upsert.id, "sub-9");
        assert_eq!(upsert.email, Some("claims@example.com".to_string()));
    }
}
