//! Repository for the `backlogs` table.

use chrono::Utc;
use sqlx::PgPool;
use taskbot_core::types::DbId;

use crate::models::backlog::{Backlog, CreateBacklog, UpdateBacklog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, priority, created_date";

/// Provides CRUD operations for backlog items.
pub struct BacklogRepo;

impl BacklogRepo {
    /// Insert a new backlog item, returning the created row.
    ///
    /// `created_date` is stamped here, when the statement is built, unless
    /// the caller supplied one.
    pub async fn create(pool: &PgPool, input: &CreateBacklog) -> Result<Backlog, sqlx::Error> {
        let created_date = input.created_date.unwrap_or_else(Utc::now);
        let query = format!(
            "INSERT INTO backlogs (project_id, name, priority, created_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Backlog>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(input.priority)
            .bind(created_date)
            .fetch_one(pool)
            .await
    }

    /// Find a backlog item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Backlog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM backlogs WHERE id = $1");
        sqlx::query_as::<_, Backlog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all backlog items ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Backlog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM backlogs ORDER BY id ASC");
        sqlx::query_as::<_, Backlog>(&query).fetch_all(pool).await
    }

    /// List a project's backlog, highest priority first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Backlog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM backlogs
             WHERE project_id = $1
             ORDER BY priority DESC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Backlog>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a backlog item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBacklog,
    ) -> Result<Option<Backlog>, sqlx::Error> {
        let query = format!(
            "UPDATE backlogs SET
                project_id = COALESCE($2, project_id),
                name = COALESCE($3, name),
                priority = COALESCE($4, priority)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Backlog>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(input.priority)
            .fetch_optional(pool)
            .await
    }

    /// Delete a backlog item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM backlogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
