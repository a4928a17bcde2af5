//! Table definitions for the nine taskbot entities.
//!
//! DDL is executed as `CREATE TABLE IF NOT EXISTS` statements in
//! foreign-key dependency order. An existing table is never altered or
//! dropped, so running this on every process start is safe.
//!
//! Timestamp columns carry no database-side default: the repository layer
//! stamps the insert time when it builds the statement, so tests can supply
//! a fixed time through the create DTOs.

use crate::DbPool;

/// Names of all tables this layer owns, in creation order.
pub const TABLES: [&str; 9] = [
    "roles",
    "users",
    "projects",
    "statuses",
    "backlogs",
    "resources",
    "tasks",
    "logs",
    "comments",
];

/// All FKs are `ON DELETE RESTRICT`: deleting a parent that still has
/// dependents fails with the engine's referential-integrity error.
const CREATE_STATEMENTS: [&str; 9] = [
    "CREATE TABLE IF NOT EXISTS roles (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(50) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        username VARCHAR(100) NOT NULL,
        email VARCHAR(200) NOT NULL,
        role_id BIGINT REFERENCES roles(id) ON DELETE RESTRICT
    )",
    "CREATE TABLE IF NOT EXISTS projects (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        description TEXT,
        start_date TIMESTAMPTZ,
        end_date TIMESTAMPTZ
    )",
    "CREATE TABLE IF NOT EXISTS statuses (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS backlogs (
        id BIGSERIAL PRIMARY KEY,
        project_id BIGINT REFERENCES projects(id) ON DELETE RESTRICT,
        name VARCHAR(200) NOT NULL,
        priority INTEGER,
        created_date TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS resources (
        id BIGSERIAL PRIMARY KEY,
        project_id BIGINT REFERENCES projects(id) ON DELETE RESTRICT,
        name VARCHAR(200) NOT NULL,
        resource_type VARCHAR(100),
        url VARCHAR(300)
    )",
    "CREATE TABLE IF NOT EXISTS tasks (
        id BIGSERIAL PRIMARY KEY,
        project_id BIGINT REFERENCES projects(id) ON DELETE RESTRICT,
        title VARCHAR(200) NOT NULL,
        description TEXT,
        status_id BIGINT REFERENCES statuses(id) ON DELETE RESTRICT,
        assigned_user_id BIGINT REFERENCES users(id) ON DELETE RESTRICT,
        deadline TIMESTAMPTZ
    )",
    "CREATE TABLE IF NOT EXISTS logs (
        id BIGSERIAL PRIMARY KEY,
        task_id BIGINT REFERENCES tasks(id) ON DELETE RESTRICT,
        user_id BIGINT REFERENCES users(id) ON DELETE RESTRICT,
        change_description TEXT,
        change_date TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS comments (
        id BIGSERIAL PRIMARY KEY,
        task_id BIGINT REFERENCES tasks(id) ON DELETE RESTRICT,
        user_id BIGINT REFERENCES users(id) ON DELETE RESTRICT,
        content TEXT NOT NULL,
        created_date TIMESTAMPTZ NOT NULL
    )",
];

/// Create every table if it does not already exist.
pub async fn ensure_tables(pool: &DbPool) -> Result<(), sqlx::Error> {
    for ddl in CREATE_STATEMENTS {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!(tables = TABLES.len(), "ensured all tables exist");
    Ok(())
}
