//! Postgres bootstrap for the catalog store.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::repository::{PgVideoRepository, VideoRepository};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;

        tracing::info!(max_connections = config.max_connections, "Catalog pool established");

        Ok(Self { pool })
    }

    /// Applies the embedded `videos` schema migrations.
    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Catalog schema is up to date");
        Ok(())
    }

    /// Catalog gateway backed by this pool.
    pub fn video_repository(&self) -> Arc<dyn VideoRepository> {
        Arc::new(PgVideoRepository::new(self.pool.clone()))
    }
}
