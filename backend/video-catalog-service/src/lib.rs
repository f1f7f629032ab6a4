pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::Config;
pub use error::{AppError, Result};

use crate::config::CatalogConfig;
use crate::repository::VideoRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn VideoRepository>,
    pub catalog: CatalogConfig,
}

impl AppState {
    pub fn new(repository: Arc<dyn VideoRepository>, catalog: CatalogConfig) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(api::routes())
        .layer(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
