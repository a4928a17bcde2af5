//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskbot_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, status_id, assigned_user_id, deadline";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, title, description, status_id, assigned_user_id, deadline)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status_id)
            .bind(input.assigned_user_id)
            .bind(input.deadline)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// List all tasks belonging to a project.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List all tasks in a given status.
    pub async fn list_by_status(pool: &PgPool, status_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE status_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query)
            .bind(status_id)
            .fetch_all(pool)
            .await
    }

    /// List all tasks assigned to a user, earliest deadline first.
    pub async fn list_by_assignee(pool: &PgPool, user_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE assigned_user_id = $1
             ORDER BY deadline ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                project_id = COALESCE($2, project_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                status_id = COALESCE($5, status_id),
                assigned_user_id = COALESCE($6, assigned_user_id),
                deadline = COALESCE($7, deadline)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status_id)
            .bind(input.assigned_user_id)
            .bind(input.deadline)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    ///
    /// Fails with the engine's foreign-key error while logs or comments
    /// still reference the task.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
