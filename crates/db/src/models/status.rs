//! Status entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbot_core::types::DbId;

/// A status row from the `statuses` table (e.g. `"todo"`, `"done"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Status {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new status.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStatus {
    pub name: String,
}

/// DTO for renaming a status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatus {
    pub name: Option<String>,
}
