use async_trait::async_trait;
use serde::Serialize;

/// Result of a swing analysis. Scores are in the 0.0 to 1.0 range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwingAnalysis {
    pub head_stability: f64,
    pub x_factor: f64,
    pub hand_speed: f64,
    pub suggestion: String,
}

/// Seam for the analysis engine. The real engine is an external
/// collaborator that will be wired in behind this trait; handlers only
/// depend on the four-field contract.
#[async_trait]
pub trait SwingAnalyzer: Send + Sync {
    async fn analyze(&self, file_path: &str) -> anyhow::Result<SwingAnalysis>;
}

/// Placeholder engine. Never inspects the file and always returns the
/// same metrics.
#[derive(Clone, Default)]
pub struct StubAnalyzer;

#[async_trait]
impl SwingAnalyzer for StubAnalyzer {
    async fn analyze(&self, _file_path: &str) -> anyhow::Result<SwingAnalysis> {
        Ok(SwingAnalysis {
            head_stability: 0.82,
            x_factor: 0.75,
            hand_speed: 0.88,
            suggestion: "Keep your head more stable through impact and rotate hips earlier."
                .to_string(),
        })
    }
}
