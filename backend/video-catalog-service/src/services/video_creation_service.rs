// Video creation service - registers new titles in the catalog
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{CreateVideoRequest, Video};
use crate::repository::{RepositoryError, VideoRepository};

pub struct VideoCreationService {
    repository: Arc<dyn VideoRepository>,
}

impl VideoCreationService {
    pub fn new(repository: Arc<dyn VideoRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new video unless its title is already taken.
    ///
    /// The pre-read answers the common case; a create that loses a race
    /// after the read is caught by the store's uniqueness check and reported
    /// as the same conflict.
    pub async fn create(&self, req: CreateVideoRequest) -> Result<Video> {
        let candidate = Video::from(req);

        if self.repository.find_by_title(&candidate.title).await?.is_some() {
            tracing::warn!(title = %candidate.title, "Video title already taken");
            return Err(AppError::Conflict(candidate.title));
        }

        let video = self.repository.insert(candidate).await.map_err(|e| match e {
            RepositoryError::Conflict(title) => {
                tracing::warn!(title = %title, "Video title taken by a concurrent create");
                AppError::Conflict(title)
            }
            other => AppError::Storage(other),
        })?;

        tracing::info!(title = %video.title, is_private = video.is_private, "Video created");
        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryVideoRepository;
    use async_trait::async_trait;

    fn request(title: &str, is_private: Option<bool>) -> CreateVideoRequest {
        CreateVideoRequest {
            title: title.to_string(),
            url: format!("http://x/{title}.mp4"),
            duration: 120,
            is_private,
        }
    }

    #[tokio::test]
    async fn create_persists_and_defaults_privacy() {
        let repo = Arc::new(InMemoryVideoRepository::new());
        let svc = VideoCreationService::new(repo.clone());

        let created = svc.create(request("demo", None)).await.unwrap();
        assert_eq!(created.title, "demo");
        assert!(!created.is_private);

        let stored = repo.find_by_title("demo").await.unwrap().unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn existing_private_title_still_conflicts() {
        let repo = Arc::new(InMemoryVideoRepository::new());
        let svc = VideoCreationService::new(repo.clone());
        svc.create(request("secret", Some(true))).await.unwrap();

        let err = svc.create(request("secret", Some(false))).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref t) if t == "secret"));

        let stored = repo.find_by_title("secret").await.unwrap().unwrap();
        assert!(stored.is_private);
    }

    /// Pre-read always misses, so only the store's uniqueness check can catch
    /// the duplicate. Models a create that lost the race after its read.
    struct StaleReadRepository {
        inner: InMemoryVideoRepository,
    }

    #[async_trait]
    impl VideoRepository for StaleReadRepository {
        async fn find_by_title(&self, _title: &str) -> std::result::Result<Option<Video>, RepositoryError> {
            Ok(None)
        }

        async fn list_sorted_by_title(&self, page_size: u32) -> std::result::Result<Vec<Video>, RepositoryError> {
            self.inner.list_sorted_by_title(page_size).await
        }

        async fn insert(&self, video: Video) -> std::result::Result<Video, RepositoryError> {
            self.inner.insert(video).await
        }
    }

    #[tokio::test]
    async fn store_level_duplicate_is_reported_as_conflict() {
        let repo = Arc::new(StaleReadRepository {
            inner: InMemoryVideoRepository::new(),
        });
        let svc = VideoCreationService::new(repo);

        svc.create(request("race", None)).await.unwrap();
        let err = svc.create(request("race", None)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref t) if t == "race"));
    }

    #[tokio::test]
    async fn concurrent_creates_produce_exactly_one_video() {
        let repo = Arc::new(InMemoryVideoRepository::new());
        let first = VideoCreationService::new(repo.clone());
        let second = VideoCreationService::new(repo.clone());

        let (a, b) = tokio::join!(
            first.create(request("same", None)),
            second.create(request("same", None))
        );

        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert_eq!(repo.len().await, 1);
    }
}
