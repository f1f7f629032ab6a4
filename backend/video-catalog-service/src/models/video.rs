use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Upper bound on a title's UTF-8 length. Keeps the primary-key index entry
/// well inside the Postgres btree row limit.
pub const MAX_TITLE_BYTES: usize = 1024;

/// A catalog entry. The title is the primary key and never changes once stored.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Video {
    pub title: String,
    pub url: String,
    /// Length in seconds.
    pub duration: i64,
    pub is_private: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    #[validate(
        length(min = 1, message = "title must not be empty"),
        custom(function = "validate_title")
    )]
    pub title: String,
    #[validate(
        length(min = 1, message = "url must not be empty"),
        custom(function = "reject_nul")
    )]
    pub url: String,
    #[validate(range(min = 0, message = "duration must not be negative"))]
    pub duration: i64,
    pub is_private: Option<bool>,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.len() > MAX_TITLE_BYTES {
        return Err(ValidationError::new("title_too_long")
            .with_message(format!("title must be at most {MAX_TITLE_BYTES} bytes").into()));
    }
    reject_nul(title)
}

// Text columns cannot hold U+0000.
fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_character")
            .with_message("must not contain NUL characters".into()));
    }
    Ok(())
}

impl From<CreateVideoRequest> for Video {
    fn from(req: CreateVideoRequest) -> Self {
        Self {
            title: req.title,
            url: req.url,
            duration: req.duration,
            is_private: req.is_private.unwrap_or(false),
        }
    }
}

/// Public representation. The privacy flag stays internal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoResponse {
    pub title: String,
    pub url: String,
    pub duration: i64,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self {
            title: video.title,
            url: video.url,
            duration: video.duration,
        }
    }
}
