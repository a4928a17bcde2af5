//! Repository for the `statuses` table.

use sqlx::PgPool;
use taskbot_core::types::DbId;

use crate::models::status::{CreateStatus, Status, UpdateStatus};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for statuses.
pub struct StatusRepo;

impl StatusRepo {
    /// Insert a new status, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStatus) -> Result<Status, sqlx::Error> {
        let query = format!("INSERT INTO statuses (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Status>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a status by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses WHERE id = $1");
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a status by name (case-sensitive).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses WHERE name = $1");
        sqlx::query_as::<_, Status>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all statuses ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses ORDER BY id ASC");
        sqlx::query_as::<_, Status>(&query).fetch_all(pool).await
    }

    /// Update a status. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStatus,
    ) -> Result<Option<Status>, sqlx::Error> {
        let query = format!(
            "UPDATE statuses SET name = COALESCE($2, name) WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a status by ID. Returns `true` if a row was removed.
    ///
    /// Fails with the engine's foreign-key error while any task still
    /// carries the status.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM statuses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
