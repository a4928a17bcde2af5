//! Repository for the `logs` table.

use chrono::Utc;
use sqlx::PgPool;
use taskbot_core::types::DbId;

use crate::models::log::{CreateLog, Log, UpdateLog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_id, user_id, change_description, change_date";

/// Provides CRUD operations for task change-log entries.
pub struct LogRepo;

impl LogRepo {
    /// Insert a new change-log entry, returning the created row.
    ///
    /// `change_date` is stamped here, when the statement is built, unless
    /// the caller supplied one.
    pub async fn create(pool: &PgPool, input: &CreateLog) -> Result<Log, sqlx::Error> {
        let change_date = input.change_date.unwrap_or_else(Utc::now);
        let query = format!(
            "INSERT INTO logs (task_id, user_id, change_description, change_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Log>(&query)
            .bind(input.task_id)
            .bind(input.user_id)
            .bind(&input.change_description)
            .bind(change_date)
            .fetch_one(pool)
            .await
    }

    /// Find a change-log entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Log>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM logs WHERE id = $1");
        sqlx::query_as::<_, Log>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a task's change history, most recent first.
    pub async fn list_by_task(pool: &PgPool, task_id: DbId) -> Result<Vec<Log>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM logs WHERE task_id = $1 ORDER BY change_date DESC, id DESC"
        );
        sqlx::query_as::<_, Log>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's recorded changes, most recent first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Log>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM logs WHERE user_id = $1 ORDER BY change_date DESC, id DESC"
        );
        sqlx::query_as::<_, Log>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Amend a change-log entry's description.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLog,
    ) -> Result<Option<Log>, sqlx::Error> {
        let query = format!(
            "UPDATE logs SET change_description = COALESCE($2, change_description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Log>(&query)
            .bind(id)
            .bind(&input.change_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a change-log entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM logs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
