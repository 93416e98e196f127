use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub video_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://golfcoach.db".into());
        let video_dir = std::env::var("VIDEO_DIR")
            .unwrap_or_else(|_| "videos".into())
            .into();
        Ok(Self {
            database_url,
            video_dir,
        })
    }
}
