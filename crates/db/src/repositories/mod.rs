//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Relationship navigation is an
//! explicit lookup (`TaskRepo::list_by_project`), never implicit loading.
//! Engine errors, including constraint violations, are returned as raw
//! `sqlx::Error` without translation.

pub mod backlog_repo;
pub mod comment_repo;
pub mod log_repo;
pub mod project_repo;
pub mod resource_repo;
pub mod role_repo;
pub mod status_repo;
pub mod task_repo;
pub mod user_repo;

pub use backlog_repo::BacklogRepo;
pub use comment_repo::CommentRepo;
pub use log_repo::LogRepo;
pub use project_repo::ProjectRepo;
pub use resource_repo::ResourceRepo;
pub use role_repo::RoleRepo;
pub use status_repo::StatusRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
