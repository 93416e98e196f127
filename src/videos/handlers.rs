use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use tracing::{error, instrument};

use crate::{
    error::ApiError,
    state::AppState,
    videos::{
        dto::{OwnerQuery, UploadResponse, VideoListItem},
        repo::Video,
        services::store_upload,
    },
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/videos", get(list_videos))
        .route("/videos/:video_id", get(stream_video))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/videos/upload", post(upload_video))
        .layer(DefaultBodyLimit::max(200 * 1024 * 1024)) // 200MB
}

/// POST /videos/upload (multipart)
/// Fields: user_id, title, file (binary).
#[instrument(skip(state, mp))]
pub async fn upload_video(
    State(state): State<AppState>,
    mut mp: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut user_id: Option<i64> = None;
    let mut title: Option<String> = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = mp
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("user_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                user_id = Some(
                    text.trim()
                        .parse()
                        .map_err(|_| ApiError::BadRequest("user_id must be an integer".into()))?,
                );
            }
            Some("title") => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                );
            }
            Some("file") => {
                let name = field
                    .file_name()
                    .unwrap_or("upload.bin")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                file = Some((name, data));
            }
            _ => {}
        }
    }

    let user_id = user_id.ok_or_else(|| ApiError::BadRequest("user_id is required".into()))?;
    let title = title.ok_or_else(|| ApiError::BadRequest("title is required".into()))?;
    let (file_name, body) = file.ok_or_else(|| ApiError::BadRequest("file is required".into()))?;

    let video = store_upload(&state, user_id, &title, &file_name, body).await?;

    Ok(Json(UploadResponse {
        video_id: video.id,
        title: video.title,
    }))
}

/// GET /videos?user_id=<id>
#[instrument(skip(state))]
pub async fn list_videos(
    State(state): State<AppState>,
    Query(q): Query<OwnerQuery>,
) -> Result<Json<Vec<VideoListItem>>, ApiError> {
    let videos = Video::list_by_owner(&state.db, q.user_id).await?;
    let items = videos
        .into_iter()
        .map(|v| VideoListItem {
            video_id: v.id,
            title: v.title,
        })
        .collect();
    Ok(Json(items))
}

/// GET /videos/{video_id}, returning the stored bytes as video/mp4.
#[instrument(skip(state))]
pub async fn stream_video(
    State(state): State<AppState>,
    Path(video_id): Path<i64>,
) -> Result<Response, ApiError> {
    let video = Video::find_by_id(&state.db, video_id)
        .await?
        .ok_or(ApiError::VideoNotFound)?;

    let body = match state.files.load(&video.file_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            // Record present, bytes deleted out-of-band.
            error!(video_id, path = %video.file_path, "video bytes missing from file store");
            return Err(ApiError::VideoNotFound);
        }
        Err(e) => return Err(ApiError::Internal(e.into())),
    };

    Ok(([(header::CONTENT_TYPE, "video/mp4")], body).into_response())
}
