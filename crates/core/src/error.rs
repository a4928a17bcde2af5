#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set; refusing to start without a connection string")]
    MissingDatabaseUrl,
}
