use async_trait::async_trait;
use sqlx::PgPool;

use super::{RepositoryError, VideoRepository};
use crate::models::Video;

/// Postgres-backed catalog. The `videos.title` primary key enforces title
/// uniqueness, so concurrent creators cannot both commit.
#[derive(Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            RepositoryError::Unavailable(err.to_string())
        }
        other => RepositoryError::Database(other),
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    async fn find_by_title(&self, title: &str) -> Result<Option<Video>, RepositoryError> {
        sqlx::query_as::<_, Video>(
            "SELECT title, url, duration, is_private FROM videos WHERE title = $1",
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn list_sorted_by_title(&self, page_size: u32) -> Result<Vec<Video>, RepositoryError> {
        sqlx::query_as::<_, Video>(
            r#"
            SELECT title, url, duration, is_private
            FROM videos
            ORDER BY title COLLATE "C" ASC
            LIMIT $1
            "#,
        )
        .bind(i64::from(page_size))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn insert(&self, video: Video) -> Result<Video, RepositoryError> {
        // Autocommit: the row is durable once RETURNING comes back.
        let result = sqlx::query_as::<_, Video>(
            r#"
            INSERT INTO videos (title, url, duration, is_private)
            VALUES ($1, $2, $3, $4)
            RETURNING title, url, duration, is_private
            "#,
        )
        .bind(&video.title)
        .bind(&video.url)
        .bind(video.duration)
        .bind(video.is_private)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(stored) => Ok(stored),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(RepositoryError::Conflict(video.title))
            }
            Err(e) => Err(map_sqlx_error(e)),
        }
    }
}
