use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::ai::engine::{StubAnalyzer, SwingAnalyzer};
use crate::config::AppConfig;
use crate::filestore::FileStore;

/// Dependencies shared by all handlers, constructed once at startup and
/// injected via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub files: FileStore,
    pub analyzer: Arc<dyn SwingAnalyzer>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let opts = SqliteConnectOptions::from_str(&config.database_url)
            .context("parse DATABASE_URL")?
            .create_if_missing(true);
        let db = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .context("connect to database")?;

        // Schema is applied idempotently on every start.
        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .context("run migrations")?;

        let files = FileStore::init(config.video_dir.clone()).await?;

        Ok(Self {
            db,
            config,
            files,
            analyzer: Arc::new(StubAnalyzer),
        })
    }

    /// In-memory database plus a throwaway video directory for tests.
    #[cfg(test)]
    pub async fn for_tests(tag: &str) -> Self {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .expect("migrations");

        let dir = std::env::temp_dir().join(format!(
            "golfcoach-test-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        let files = FileStore::init(dir.clone()).await.expect("file store init");

        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            video_dir: dir,
        });

        Self {
            db,
            config,
            files,
            analyzer: Arc::new(StubAnalyzer),
        }
    }
}
