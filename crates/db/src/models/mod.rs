//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod backlog;
pub mod comment;
pub mod log;
pub mod project;
pub mod resource;
pub mod role;
pub mod status;
pub mod task;
pub mod user;
