//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbot_core::types::{DbId, Timestamp};

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub status_id: Option<DbId>,
    /// `None` while the task is unassigned.
    pub assigned_user_id: Option<DbId>,
    pub deadline: Option<Timestamp>,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub project_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub status_id: Option<DbId>,
    pub assigned_user_id: Option<DbId>,
    pub deadline: Option<Timestamp>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub project_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status_id: Option<DbId>,
    pub assigned_user_id: Option<DbId>,
    pub deadline: Option<Timestamp>,
}
