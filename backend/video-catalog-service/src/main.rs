use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use video_catalog_service::config::{Config, StorageBackend};
use video_catalog_service::db::Database;
use video_catalog_service::repository::{InMemoryVideoRepository, VideoRepository};
use video_catalog_service::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "video_catalog_service=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting video-catalog-service v{}", env!("CARGO_PKG_VERSION"));

    let repository: Arc<dyn VideoRepository> = match config.storage.backend {
        StorageBackend::Postgres => {
            let db = Database::connect(&config.database).await?;
            db.run_migrations().await?;
            db.video_repository()
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; catalog is lost on restart");
            Arc::new(InMemoryVideoRepository::new())
        }
    };

    let state = AppState::new(repository, config.catalog.clone());
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
