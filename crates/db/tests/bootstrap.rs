//! Bootstrap behaviour against a real database: idempotent database and
//! table creation, referential integrity, and data-layer timestamp stamping.

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use taskbot_db::models::backlog::CreateBacklog;
use taskbot_db::models::comment::CreateComment;
use taskbot_db::models::log::CreateLog;
use taskbot_db::models::role::CreateRole;
use taskbot_db::models::task::CreateTask;
use taskbot_db::models::user::CreateUser;
use taskbot_db::repositories::{BacklogRepo, CommentRepo, LogRepo, RoleRepo, TaskRepo, UserRepo};
use taskbot_db::{bootstrap, schema};

async fn table_names(pool: &PgPool) -> Vec<String> {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name FROM information_schema.tables
         WHERE table_schema = 'public' AND table_type = 'BASE TABLE'
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await
    .unwrap();
    rows.into_iter().map(|(name,)| name).collect()
}

#[sqlx::test]
async fn ensure_tables_creates_all_nine(pool: PgPool) {
    schema::ensure_tables(&pool).await.unwrap();

    let names = table_names(&pool).await;
    for expected in schema::TABLES {
        assert!(names.iter().any(|n| n == expected), "missing table {expected}");
    }
    assert_eq!(names.len(), schema::TABLES.len());
}

#[sqlx::test]
async fn ensure_tables_is_idempotent(pool: PgPool) {
    schema::ensure_tables(&pool).await.unwrap();
    let first = table_names(&pool).await;

    // Second run must be a no-op, not an error.
    schema::ensure_tables(&pool).await.unwrap();
    assert_eq!(table_names(&pool).await, first);
}

#[sqlx::test]
async fn database_exists_sees_configured_database(_pool: PgPool) {
    let url = std::env::var("DATABASE_URL").unwrap();
    assert!(bootstrap::database_exists(&url).await.unwrap());
}

#[sqlx::test]
async fn ensure_database_reports_existing_database(_pool: PgPool) {
    let url = std::env::var("DATABASE_URL").unwrap();
    assert!(!bootstrap::ensure_database(&url).await.unwrap());
}

/// Swap the database name in a connection URL, preserving any query string.
fn with_database(url: &str, name: &str) -> String {
    let (base, rest) = url.rsplit_once('/').expect("URL has a path");
    match rest.split_once('?') {
        Some((_, query)) => format!("{base}/{name}?{query}"),
        None => format!("{base}/{name}"),
    }
}

#[sqlx::test]
async fn ensure_database_creates_then_reports_existing(pool: PgPool) {
    let url = std::env::var("DATABASE_URL").unwrap();
    let scratch = with_database(&url, "taskbot_bootstrap_scratch");

    // Clean up any leftover from an aborted run.
    sqlx::raw_sql("DROP DATABASE IF EXISTS taskbot_bootstrap_scratch")
        .execute(&pool)
        .await
        .unwrap();

    assert!(bootstrap::ensure_database(&scratch).await.unwrap());
    assert!(bootstrap::database_exists(&scratch).await.unwrap());
    assert!(!bootstrap::ensure_database(&scratch).await.unwrap());

    sqlx::raw_sql("DROP DATABASE taskbot_bootstrap_scratch")
        .execute(&pool)
        .await
        .unwrap();
}

#[sqlx::test]
async fn task_insert_with_unknown_project_is_rejected(pool: PgPool) {
    schema::ensure_tables(&pool).await.unwrap();

    let err = TaskRepo::create(
        &pool,
        &CreateTask {
            project_id: Some(999_999),
            title: "orphan".to_string(),
            description: None,
            status_id: None,
            assigned_user_id: None,
            deadline: None,
        },
    )
    .await
    .unwrap_err();

    match err {
        sqlx::Error::Database(db) => assert!(db.is_foreign_key_violation()),
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test]
async fn missing_content_is_rejected_by_the_engine(pool: PgPool) {
    schema::ensure_tables(&pool).await.unwrap();

    let err = sqlx::query(
        "INSERT INTO comments (task_id, user_id, content, created_date)
         VALUES (NULL, NULL, NULL, NOW())",
    )
    .execute(&pool)
    .await
    .unwrap_err();

    match err {
        sqlx::Error::Database(db) => {
            assert!(matches!(db.kind(), sqlx::error::ErrorKind::NotNullViolation))
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test]
async fn omitted_dates_are_stamped_at_insert(pool: PgPool) {
    schema::ensure_tables(&pool).await.unwrap();

    // timestamptz is microsecond precision; allow for truncation.
    let skew = chrono::Duration::milliseconds(5);
    let before = Utc::now() - skew;

    let backlog = BacklogRepo::create(
        &pool,
        &CreateBacklog {
            project_id: None,
            name: "triage".to_string(),
            priority: None,
            created_date: None,
        },
    )
    .await
    .unwrap();

    let log = LogRepo::create(
        &pool,
        &CreateLog {
            task_id: None,
            user_id: None,
            change_description: Some("created".to_string()),
            change_date: None,
        },
    )
    .await
    .unwrap();

    let comment = CommentRepo::create(
        &pool,
        &CreateComment {
            task_id: None,
            user_id: None,
            content: "first".to_string(),
            created_date: None,
        },
    )
    .await
    .unwrap();

    let after = Utc::now() + skew;
    for stamped in [backlog.created_date, log.change_date, comment.created_date] {
        assert!(stamped >= before && stamped <= after, "{stamped} outside [{before}, {after}]");
    }
}

#[sqlx::test]
async fn supplied_dates_pass_through_unchanged(pool: PgPool) {
    schema::ensure_tables(&pool).await.unwrap();

    let fixed = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let backlog = BacklogRepo::create(
        &pool,
        &CreateBacklog {
            project_id: None,
            name: "planned".to_string(),
            priority: Some(3),
            created_date: Some(fixed),
        },
    )
    .await
    .unwrap();

    assert_eq!(backlog.created_date, fixed);
}

#[sqlx::test]
async fn role_delete_with_users_is_restricted(pool: PgPool) {
    schema::ensure_tables(&pool).await.unwrap();

    let role = RoleRepo::create(&pool, &CreateRole { name: "admin".to_string() })
        .await
        .unwrap();
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role_id: Some(role.id),
        },
    )
    .await
    .unwrap();

    let err = RoleRepo::delete(&pool, role.id).await.unwrap_err();
    match err {
        sqlx::Error::Database(db) => assert!(db.is_foreign_key_violation()),
        other => panic!("expected a database error, got {other:?}"),
    }

    // Once the dependent user is gone, the delete goes through.
    assert!(UserRepo::delete(&pool, user.id).await.unwrap());
    assert!(RoleRepo::delete(&pool, role.id).await.unwrap());
}
