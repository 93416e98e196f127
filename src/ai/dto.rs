use serde::Serialize;

use crate::ai::engine::SwingAnalysis;

/// Returned by POST /ai/analyze/{video_id}.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub video_id: i64,
    pub title: String,
    pub analysis: SwingAnalysis,
}
