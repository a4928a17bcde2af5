//! Role entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbot_core::types::DbId;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new role.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRole {
    pub name: String,
}

/// DTO for renaming a role.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRole {
    pub name: Option<String>,
}
