use bytes::Bytes;
use tracing::info;

use crate::auth::repo::User;
use crate::error::ApiError;
use crate::state::AppState;
use crate::videos::repo::Video;

/// Stores an upload: verifies the owner, writes the bytes to the file
/// store, then records the row. Ordering matters: a video row must never
/// reference a file that was not written, so a file-store failure aborts
/// the request before any insert.
pub async fn store_upload(
    state: &AppState,
    owner_id: i64,
    title: &str,
    file_name: &str,
    body: Bytes,
) -> Result<Video, ApiError> {
    if User::find_by_id(&state.db, owner_id).await?.is_none() {
        return Err(ApiError::UserNotFound);
    }

    let path = state.files.save(owner_id, file_name, body).await?;
    let video = Video::create(&state.db, title, &path.to_string_lossy(), owner_id).await?;

    info!(video_id = video.id, owner_id, title = %video.title, "video stored");
    Ok(video)
}

#[cfg(test)]
mod upload_tests {
    use super::*;

    #[tokio::test]
    async fn unknown_owner_creates_no_row_and_no_file() {
        let state = AppState::for_tests("upload-unknown").await;
        let err = store_upload(&state, 99, "swing", "swing.mp4", Bytes::from_static(b"bytes"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UserNotFound));

        let rows = Video::list_by_owner(&state.db, 99).await.expect("list");
        assert!(rows.is_empty());
        assert!(!state.files.path_for(99, "swing.mp4").exists());
    }

    #[tokio::test]
    async fn upload_writes_file_then_row() {
        let state = AppState::for_tests("upload-ok").await;
        let user = User::create(&state.db, "a@x.com", "p").await.expect("user");

        let video = store_upload(&state, user.id, "swing1", "swing.mp4", Bytes::from_static(b"mp4!"))
            .await
            .expect("upload");
        assert_eq!(video.id, 1);
        assert_eq!(video.title, "swing1");

        // Row points at a file that exists and holds the uploaded bytes.
        assert_eq!(std::fs::read(&video.file_path).expect("stored file"), b"mp4!");

        let listed = Video::list_by_owner(&state.db, user.id).await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, video.id);
    }
}
