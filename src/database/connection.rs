use crate::{config::DatabaseConfig, error::Result};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    sqlx::migrate!().run(&pool).await.map_err(|e| {
        crate::error::AppError::InternalError(format!("Failed to run migrations: {}", e))
    })?;

    tracing::info!(
        "Database connection established with {} max connections",
        config.max_connections
    );

    Ok(pool)
}

pub async fn check_health(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
