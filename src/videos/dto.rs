use serde::{Deserialize, Serialize};

/// Ownership context for the list endpoint. There is no session state;
/// the caller supplies user_id on every request.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct VideoListItem {
    pub video_id: i64,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub video_id: i64,
    pub title: String,
}
