use chrono::{Duration, SecondsFormat, Utc};
use sqlx::SqlitePool;
use tracing::{debug, error, info};

use super::models::{Session, UpsertUser, User};
use crate::common::{generate_session_id, ApiError};

/// Sweep cadence for expired session rows
const SWEEP_INTERVAL_SECS: u64 = 3600;

pub struct AuthService {
    db: SqlitePool,
}

impl AuthService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    // ============================================================================
    // User Operations
    // ============================================================================

    /// Get a user by id
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, first_name, last_name, profile_image_url, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(user)
    }

    /// Insert or refresh a user row from login callback claims
    ///
    /// Conflicts on the primary key update every claim column and bump
    /// updated_at, so the row always reflects the latest login.
    pub async fn upsert_user(&self, user: UpsertUser) -> Result<User, ApiError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO users (id, email, first_name, last_name, profile_image_url, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                email = excluded.email,
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                profile_image_url = excluded.profile_image_url,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.profile_image_url)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, first_name, last_name, profile_image_url, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(&user.id)
        .fetch_one(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(user)
    }

    // ============================================================================
    // Session Operations
    // ============================================================================

    /// Create a session row for a user
    pub async fn create_session(&self, user_id: &str, ttl_hours: i64) -> Result<Session, ApiError> {
        let sid = generate_session_id();
        let expire =
            (Utc::now() + Duration::hours(ttl_hours)).to_rfc3339_opts(SecondsFormat::Secs, true);

        sqlx::query("INSERT INTO sessions (sid, user_id, expire) VALUES (?, ?, ?)")
            .bind(&sid)
            .bind(user_id)
            .bind(&expire)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        debug!(user_id = %user_id, "Created session");

        let session = sqlx::query_as::<_, Session>(
            "SELECT sid, user_id, expire, created_at FROM sessions WHERE sid = ?",
        )
        .bind(&sid)
        .fetch_one(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(session)
    }

    /// Look up an unexpired session by sid
    pub async fn get_valid_session(&self, sid: &str) -> Result<Option<Session>, ApiError> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let session = sqlx::query_as::<_, Session>(
            "SELECT sid, user_id, expire, created_at FROM sessions WHERE sid = ? AND expire > ?",
        )
        .bind(sid)
        .bind(&now)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(session)
    }

    /// Delete a session row (logout)
    pub async fn delete_session(&self, sid: &str) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM sessions WHERE sid = ?")
            .bind(sid)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(())
    }

    /// Delete every expired session row, returning how many were removed
    pub async fn purge_expired_sessions(&self) -> Result<u64, ApiError> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let result = sqlx::query("DELETE FROM sessions WHERE expire <= ?")
            .bind(&now)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(result.rows_affected())
    }

    /// Spawn the background task that sweeps expired sessions
    pub fn start_session_sweeper(db: SqlitePool) {
        tokio::spawn(async move {
            let service = AuthService::new(db);
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(SWEEP_INTERVAL_SECS));

            loop {
                interval.tick().await;
                match service.purge_expired_sessions().await {
                    Ok(0) => {}
                    Ok(purged) => info!(purged = purged, "Swept expired sessions"),
                    Err(e) => error!(error = %e, "Session sweep failed"),
                }
            }
        });
    }
}
