use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RepositoryError, VideoRepository};
use crate::models::Video;

/// Process-local store keyed by title. `String` ordering is byte ordering,
/// which matches the `COLLATE "C"` listing of the Postgres store.
#[derive(Debug, Default)]
pub struct InMemoryVideoRepository {
    videos: RwLock<BTreeMap<String, Video>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_videos(videos: impl IntoIterator<Item = Video>) -> Self {
        let videos = videos
            .into_iter()
            .map(|v| (v.title.clone(), v))
            .collect();
        Self {
            videos: RwLock::new(videos),
        }
    }

    pub async fn len(&self) -> usize {
        self.videos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.videos.read().await.is_empty()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn find_by_title(&self, title: &str) -> Result<Option<Video>, RepositoryError> {
        Ok(self.videos.read().await.get(title).cloned())
    }

    async fn list_sorted_by_title(&self, page_size: u32) -> Result<Vec<Video>, RepositoryError> {
        let videos = self.videos.read().await;
        Ok(videos.values().take(page_size as usize).cloned().collect())
    }

    async fn insert(&self, video: Video) -> Result<Video, RepositoryError> {
        // Check and write under the same lock.
        let mut videos = self.videos.write().await;
        match videos.entry(video.title.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Conflict(video.title)),
            Entry::Vacant(slot) => Ok(slot.insert(video).clone()),
        }
    }
}
