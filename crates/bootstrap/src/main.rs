use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskbot_core::config::AppConfig;
use taskbot_db::bootstrap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskbot_bootstrap=info,taskbot_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    match bootstrap::ensure_database(&config.database_url).await {
        Ok(true) => tracing::info!("Database created"),
        Ok(false) => tracing::info!("Database already exists"),
        // A concurrent creator won the race; the database is there either way.
        Err(e) if bootstrap::is_duplicate_database(&e) => {
            tracing::warn!("Database was created concurrently, continuing");
        }
        Err(e) => return Err(e).context("Failed to ensure database exists"),
    }

    let pool = taskbot_db::create_pool(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    taskbot_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    bootstrap::ensure_tables(&pool)
        .await
        .context("Failed to create tables")?;
    tracing::info!("Tables created (if not already existing)");

    Ok(())
}
