//! Backlog entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbot_core::types::{DbId, Timestamp};

/// A backlog item row from the `backlogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Backlog {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub name: String,
    pub priority: Option<i32>,
    pub created_date: Timestamp,
}

/// DTO for creating a new backlog item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBacklog {
    pub project_id: Option<DbId>,
    pub name: String,
    pub priority: Option<i32>,
    /// `None` means the repository stamps the insert time.
    pub created_date: Option<Timestamp>,
}

/// DTO for updating an existing backlog item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBacklog {
    pub project_id: Option<DbId>,
    pub name: Option<String>,
    pub priority: Option<i32>,
}
