//! Data-access layer for the taskbot backend.
//!
//! Exposes the connection pool, the idempotent bootstrap routines, and the
//! per-entity models and repositories. The pool is constructed once by the
//! process entry point and passed down; nothing in this crate holds a
//! global handle.

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod schema;

use sqlx::postgres::PgPoolOptions;

/// Shared connection pool handle. Cloning is cheap; clones share the pool.
pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Every checkout is liveness-checked (`test_before_acquire`), so a stale
/// connection is detected and replaced before it reaches a caller.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .test_before_acquire(true)
        .connect(database_url)
        .await
}

/// Verify the database is reachable by running a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
