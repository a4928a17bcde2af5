//! Comment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbot_core::types::{DbId, Timestamp};

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub task_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub content: String,
    pub created_date: Timestamp,
}

/// DTO for creating a new comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub task_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub content: String,
    /// `None` means the repository stamps the insert time.
    pub created_date: Option<Timestamp>,
}

/// DTO for editing a comment's content.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComment {
    pub content: Option<String>,
}
