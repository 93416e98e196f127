use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    ai::dto::AnalyzeResponse,
    error::ApiError,
    state::AppState,
    videos::repo::Video,
};

pub fn analyze_routes() -> Router<AppState> {
    Router::new().route("/ai/analyze/:video_id", post(analyze_video))
}

/// POST /ai/analyze/{video_id}
#[instrument(skip(state))]
pub async fn analyze_video(
    State(state): State<AppState>,
    Path(video_id): Path<i64>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let video = Video::find_by_id(&state.db, video_id)
        .await?
        .ok_or(ApiError::VideoNotFound)?;

    let analysis = state.analyzer.analyze(&video.file_path).await?;

    info!(video_id = video.id, "video analyzed");
    Ok(Json(AnalyzeResponse {
        video_id: video.id,
        title: video.title,
        analysis,
    }))
}

#[cfg(test)]
mod analyze_tests {
    use super::*;
    use crate::auth::repo::User;
    use crate::videos::services::store_upload;
    use bytes::Bytes;

    #[tokio::test]
    async fn analyze_returns_fixed_metrics_for_existing_video() {
        let state = AppState::for_tests("analyze-ok").await;
        let user = User::create(&state.db, "a@x.com", "p").await.expect("user");
        let video = store_upload(&state, user.id, "swing1", "swing.mp4", Bytes::from_static(b"x"))
            .await
            .expect("upload");

        let resp = analyze_video(State(state), Path(video.id))
            .await
            .expect("analyze");
        assert_eq!(resp.0.video_id, video.id);
        assert_eq!(resp.0.title, "swing1");
        assert_eq!(resp.0.analysis.head_stability, 0.82);
        assert_eq!(resp.0.analysis.x_factor, 0.75);
        assert_eq!(resp.0.analysis.hand_speed, 0.88);
        assert_eq!(
            resp.0.analysis.suggestion,
            "Keep your head more stable through impact and rotate hips earlier."
        );
    }

    #[tokio::test]
    async fn analyze_unknown_video_is_not_found() {
        let state = AppState::for_tests("analyze-miss").await;
        let err = analyze_video(State(state), Path(999)).await.unwrap_err();
        assert!(matches!(err, ApiError::VideoNotFound));
    }
}
