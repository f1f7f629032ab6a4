use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::repository::RepositoryError;
use crate::utils::title_codec::TitleCodecError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidEncoding(String),

    #[error("{0}")]
    Validation(String),

    #[error("Already exists a video with title: '{0}'")]
    Conflict(String),

    /// Covers both a missing title and a private one.
    #[error("Video not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(RepositoryError),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(title) => AppError::Conflict(title),
            other => AppError::Storage(other),
        }
    }
}

impl From<TitleCodecError> for AppError {
    fn from(err: TitleCodecError) -> Self {
        AppError::InvalidEncoding(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            AppError::InvalidEncoding(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_ENCODING", msg.clone())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(_) => (StatusCode::BAD_REQUEST, "CONFLICT", self.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", "Storage error occurred".to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            AppError::InvalidEncoding("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("demo".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_errors_map_to_500() {
        let err = AppError::from(RepositoryError::Unavailable("down".into()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn repository_conflict_becomes_domain_conflict() {
        let err = AppError::from(RepositoryError::Conflict("demo".into()));
        assert!(matches!(err, AppError::Conflict(ref t) if t == "demo"));
        assert_eq!(err.to_string(), "Already exists a video with title: 'demo'");
    }
}
