//! Repository for the `comments` table.

use chrono::Utc;
use sqlx::PgPool;
use taskbot_core::types::DbId;

use crate::models::comment::{Comment, CreateComment, UpdateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_id, user_id, content, created_date";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    ///
    /// `created_date` is stamped here, when the statement is built, unless
    /// the caller supplied one.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let created_date = input.created_date.unwrap_or_else(Utc::now);
        let query = format!(
            "INSERT INTO comments (task_id, user_id, content, created_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.task_id)
            .bind(input.user_id)
            .bind(&input.content)
            .bind(created_date)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a task's comments in the order they were written.
    pub async fn list_by_task(pool: &PgPool, task_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE task_id = $1 ORDER BY created_date ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's comments, most recent first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE user_id = $1 ORDER BY created_date DESC, id DESC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Edit a comment's content.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET content = COALESCE($2, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
