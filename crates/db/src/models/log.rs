//! Change-log entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbot_core::types::{DbId, Timestamp};

/// A change-log row from the `logs` table, recording who changed a task
/// and when.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Log {
    pub id: DbId,
    pub task_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub change_description: Option<String>,
    pub change_date: Timestamp,
}

/// DTO for creating a new change-log entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLog {
    pub task_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub change_description: Option<String>,
    /// `None` means the repository stamps the insert time.
    pub change_date: Option<Timestamp>,
}

/// DTO for amending a change-log entry's description.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLog {
    pub change_description: Option<String>,
}
