// Video query service - catalog listing and lookup by title
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::Video;
use crate::repository::VideoRepository;
use crate::utils::title_codec;

pub struct VideoQueryService {
    repository: Arc<dyn VideoRepository>,
    page_size: u32,
}

impl VideoQueryService {
    pub fn new(repository: Arc<dyn VideoRepository>, page_size: u32) -> Self {
        Self {
            repository,
            page_size,
        }
    }

    /// First page of the catalog, sorted by title. Private videos are listed.
    pub async fn list_all(&self) -> Result<Vec<Video>> {
        let videos = self.repository.list_sorted_by_title(self.page_size).await?;
        tracing::debug!(count = videos.len(), page_size = self.page_size, "Listed videos");
        Ok(videos)
    }

    /// Looks up a video by its percent-encoded title.
    ///
    /// A private video is reported exactly like a missing one.
    pub async fn get_by_title(&self, encoded_title: &str) -> Result<Video> {
        let title = title_codec::decode(encoded_title).map_err(|e| {
            tracing::warn!(segment = encoded_title, "Rejected undecodable title");
            AppError::from(e)
        })?;

        // A title with NUL can never have been stored, so there is nothing to fetch.
        let found = if title.contains('\0') {
            None
        } else {
            self.repository.find_by_title(&title).await?
        };

        match found {
            Some(video) if !video.is_private => Ok(video),
            _ => Err(AppError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryVideoRepository, RepositoryError};

    fn video(title: &str, is_private: bool) -> Video {
        Video {
            title: title.to_string(),
            url: format!("http://cdn/{title}.mp4"),
            duration: 90,
            is_private,
        }
    }

    fn service(videos: Vec<Video>, page_size: u32) -> VideoQueryService {
        VideoQueryService::new(
            Arc::new(InMemoryVideoRepository::with_videos(videos)),
            page_size,
        )
    }

    #[tokio::test]
    async fn get_by_title_returns_public_video() {
        let svc = service(vec![video("my video", false)], 20);

        let found = svc.get_by_title("my%20video").await.unwrap();
        assert_eq!(found, video("my video", false));
    }

    #[tokio::test]
    async fn private_and_missing_are_both_not_found() {
        let svc = service(vec![video("hidden", true)], 20);

        assert!(matches!(svc.get_by_title("hidden").await, Err(AppError::NotFound)));
        assert!(matches!(svc.get_by_title("absent").await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn undecodable_title_is_invalid_encoding() {
        let svc = service(vec![], 20);

        assert!(matches!(
            svc.get_by_title("%FF").await,
            Err(AppError::InvalidEncoding(_))
        ));
    }

    /// Stands in for Postgres, which errors on a NUL byte in a bound text value.
    struct NulRejectingRepository;

    #[async_trait::async_trait]
    impl VideoRepository for NulRejectingRepository {
        async fn find_by_title(&self, title: &str) -> std::result::Result<Option<Video>, RepositoryError> {
            assert!(!title.contains('\0'), "lookup reached the store");
            Ok(None)
        }

        async fn list_sorted_by_title(&self, _page_size: u32) -> std::result::Result<Vec<Video>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn insert(&self, video: Video) -> std::result::Result<Video, RepositoryError> {
            Ok(video)
        }
    }

    #[tokio::test]
    async fn title_with_nul_is_not_found_without_touching_store() {
        let svc = VideoQueryService::new(Arc::new(NulRejectingRepository), 20);

        assert!(matches!(svc.get_by_title("%00").await, Err(AppError::NotFound)));
        assert!(matches!(svc.get_by_title("a%00b").await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn list_all_respects_page_size_and_order() {
        let svc = service(
            vec![video("c", false), video("a", true), video("b", false)],
            2,
        );

        let titles: Vec<String> = svc
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.title)
            .collect();
        assert_eq!(titles, vec!["a", "b"]);
    }
}
