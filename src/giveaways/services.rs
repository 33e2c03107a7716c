use sqlx::SqlitePool;
use tracing::info;

use super::models::{CreateGiveawayRequest, Giveaway, GiveawayEntry};
use crate::common::ApiError;

pub struct GiveawaysService {
    db: SqlitePool,
}

impl GiveawaysService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    // ============================================================================
    // Giveaway Catalog Operations
    // ============================================================================

    /// Get active giveaways, newest first
    pub async fn get_active_giveaways(&self) -> Result<Vec<Giveaway>, ApiError> {
        let giveaways = sqlx::query_as::<_, Giveaway>(
            r#"
            SELECT id, title, description, image_url, value, end_date, entry_count,
                   is_active, created_at
            FROM giveaways
            WHERE is_active = 1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(giveaways)
    }

    /// Get every giveaway regardless of active flag, newest first
    pub async fn get_giveaways(&self) -> Result<Vec<Giveaway>, ApiError> {
        let giveaways = sqlx::query_as::<_, Giveaway>(
            r#"
            SELECT id, title, description, image_url, value, end_date, entry_count,
                   is_active, created_at
            FROM giveaways
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(giveaways)
    }

    /// Get giveaway by id
    pub async fn get_giveaway(&self, id: i64) -> Result<Option<Giveaway>, ApiError> {
        let giveaway = sqlx::query_as::<_, Giveaway>(
            r#"
            SELECT id, title, description, image_url, value, end_date, entry_count,
                   is_active, created_at
            FROM giveaways
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(giveaway)
    }

    /// Create a new giveaway
    pub async fn create_giveaway(
        &self,
        request: CreateGiveawayRequest,
    ) -> Result<Giveaway, ApiError> {
        let is_active = request.is_active.unwrap_or(true) as i64;

        let result = sqlx::query(
            r#"
            INSERT INTO giveaways (title, description, image_url, value, end_date, is_active)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.image_url)
        .bind(&request.value)
        .bind(&request.end_date)
        .bind(is_active)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let giveaway_id = result.last_insert_rowid();

        info!(
            giveaway_id = giveaway_id,
            title = %request.title,
            "Created giveaway"
        );

        self.get_giveaway(giveaway_id).await?.ok_or_else(|| {
            ApiError::InternalServer("Created giveaway could not be read back".to_string())
        })
    }

    // ============================================================================
    // Entry Operations
    // ============================================================================

    /// Record a user's entry into a giveaway
    ///
    /// The UNIQUE(user_id, giveaway_id) constraint arbitrates concurrent
    /// entries; a violation surfaces as AlreadyExists. The denormalized
    /// entry_count is bumped only after the insert succeeds.
    pub async fn enter_giveaway(
        &self,
        user_id: &str,
        giveaway_id: i64,
    ) -> Result<GiveawayEntry, ApiError> {
        let result =
            sqlx::query("INSERT INTO giveaway_entries (user_id, giveaway_id) VALUES (?, ?)")
                .bind(user_id)
                .bind(giveaway_id)
                .execute(&self.db)
                .await
                .map_err(|e| {
                    if e.to_string().contains("UNIQUE constraint failed") {
                        ApiError::AlreadyExists("Already entered this giveaway".to_string())
                    } else {
                        ApiError::DatabaseError(e)
                    }
                })?;

        let entry_id = result.last_insert_rowid();

        sqlx::query("UPDATE giveaways SET entry_count = entry_count + 1 WHERE id = ?")
            .bind(giveaway_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(
            user_id = %user_id,
            giveaway_id = giveaway_id,
            "Recorded giveaway entry"
        );

        let entry = sqlx::query_as::<_, GiveawayEntry>(
            "SELECT id, user_id, giveaway_id, created_at FROM giveaway_entries WHERE id = ?",
        )
        .bind(entry_id)
        .fetch_one(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(entry)
    }

    /// Get a user's entry for a giveaway, if any
    pub async fn get_user_giveaway_entry(
        &self,
        user_id: &str,
        giveaway_id: i64,
    ) -> Result<Option<GiveawayEntry>, ApiError> {
        let entry = sqlx::query_as::<_, GiveawayEntry>(
            r#"
            SELECT id, user_id, giveaway_id, created_at
            FROM giveaway_entries
            WHERE user_id = ? AND giveaway_id = ?
            "#,
        )
        .bind(user_id)
        .bind(giveaway_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(entry)
    }
}
