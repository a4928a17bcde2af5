//! Resource entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbot_core::types::DbId;

/// A resource row from the `resources` table (links, documents, assets
/// attached to a project).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub name: String,
    pub resource_type: Option<String>,
    pub url: Option<String>,
}

/// DTO for creating a new resource.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResource {
    pub project_id: Option<DbId>,
    pub name: String,
    pub resource_type: Option<String>,
    pub url: Option<String>,
}

/// DTO for updating an existing resource. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResource {
    pub project_id: Option<DbId>,
    pub name: Option<String>,
    pub resource_type: Option<String>,
    pub url: Option<String>,
}
