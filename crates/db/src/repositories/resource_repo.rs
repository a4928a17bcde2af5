//! Repository for the `resources` table.

use sqlx::PgPool;
use taskbot_core::types::DbId;

use crate::models::resource::{CreateResource, Resource, UpdateResource};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, resource_type, url";

/// Provides CRUD operations for resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a new resource, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (project_id, name, resource_type, url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.resource_type)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// Find a resource by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all resources ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources ORDER BY id ASC");
        sqlx::query_as::<_, Resource>(&query).fetch_all(pool).await
    }

    /// List all resources attached to a project.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM resources WHERE project_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Resource>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a resource. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResource,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET
                project_id = COALESCE($2, project_id),
                name = COALESCE($3, name),
                resource_type = COALESCE($4, resource_type),
                url = COALESCE($5, url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.resource_type)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a resource by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
