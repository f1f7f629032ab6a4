//! Persistence gateway for the catalog.
//!
//! Services only see [`VideoRepository`]; the concrete store is chosen at
//! startup and injected as `Arc<dyn VideoRepository>`.

mod memory;
mod postgres;

pub use memory::InMemoryVideoRepository;
pub use postgres::PgVideoRepository;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Video;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A record with this title is already stored.
    #[error("Duplicate title: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Exact, case-sensitive lookup by title.
    async fn find_by_title(&self, title: &str) -> Result<Option<Video>, RepositoryError>;

    /// First page of the catalog ordered by title bytes, ascending.
    async fn list_sorted_by_title(&self, page_size: u32) -> Result<Vec<Video>, RepositoryError>;

    /// Stores a new record and returns it once the write is visible to readers.
    ///
    /// Implementations must refuse a second record for the same title with
    /// [`RepositoryError::Conflict`], even when two inserts race.
    async fn insert(&self, video: Video) -> Result<Video, RepositoryError>;
}
