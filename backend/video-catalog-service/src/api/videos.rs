use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use super::extract::ValidatedJson;
use crate::error::{AppError, Result};
use crate::models::{CreateVideoRequest, VideoResponse};
use crate::services::{VideoCreationService, VideoQueryService};
use crate::utils::title_codec;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/video", get(list_videos).post(create_video))
        .route("/video/:title", get(get_video))
}

async fn list_videos(State(state): State<AppState>) -> Result<Json<Vec<VideoResponse>>> {
    let query_service = VideoQueryService::new(state.repository.clone(), state.catalog.page_size);
    let videos = query_service.list_all().await?;

    Ok(Json(videos.into_iter().map(VideoResponse::from).collect()))
}

async fn get_video(State(state): State<AppState>, uri: Uri) -> Result<Json<VideoResponse>> {
    // The segment is read from the raw URI so the codec sees the original
    // escapes instead of the router's already-decoded parameter.
    let encoded_title = uri.path().rsplit('/').next().unwrap_or_default();

    let query_service = VideoQueryService::new(state.repository.clone(), state.catalog.page_size);
    let video = query_service.get_by_title(encoded_title).await?;

    Ok(Json(VideoResponse::from(video)))
}

async fn create_video(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateVideoRequest>,
) -> Result<impl IntoResponse> {
    // Location is built from the title exactly as submitted.
    let encoded_title = title_codec::encode(&payload.title)?;
    let location = HeaderValue::try_from(format!("/video/{encoded_title}"))
        .map_err(|_| AppError::from(title_codec::TitleCodecError::Unencodable))?;

    let creation_service = VideoCreationService::new(state.repository.clone());
    creation_service.create(payload).await?;

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}
