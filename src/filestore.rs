use std::path::{Path, PathBuf};

use anyhow::Context;
use bytes::Bytes;

/// Local directory holding uploaded video binaries.
///
/// Files are named `user<owner_id>_<original file name>`; a repeated
/// (user, filename) pair silently overwrites the prior upload. Concurrent
/// writes to the same path race with last-write-wins.
#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates the directory if absent. Called once at startup.
    pub async fn init(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("create video dir {}", root.display()))?;
        Ok(Self { root })
    }

    /// Storage path for an upload. Only the final component of the
    /// client-supplied name is used.
    pub fn path_for(&self, owner_id: i64, file_name: &str) -> PathBuf {
        let base = Path::new(file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin");
        self.root.join(format!("user{}_{}", owner_id, base))
    }

    /// Durably writes the upload and returns the stored path.
    pub async fn save(&self, owner_id: i64, file_name: &str, body: Bytes) -> anyhow::Result<PathBuf> {
        let path = self.path_for(owner_id, file_name);
        tokio::fs::write(&path, &body)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Reads back the raw bytes for streaming. The caller maps a missing
    /// file to its own NotFound.
    pub async fn load(&self, path: &str) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

#[cfg(test)]
mod filestore_tests {
    use super::*;

    async fn store(tag: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!("golfcoach-fs-{}-{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        FileStore::init(dir).await.expect("file store init")
    }

    #[tokio::test]
    async fn save_names_file_by_owner_and_original_name() {
        let fs = store("name").await;
        let path = fs
            .save(7, "swing.mp4", Bytes::from_static(b"abc"))
            .await
            .expect("save");
        assert!(path.ends_with("user7_swing.mp4"));
        assert_eq!(std::fs::read(&path).expect("read back"), b"abc");
    }

    #[tokio::test]
    async fn repeated_save_overwrites() {
        let fs = store("overwrite").await;
        let first = fs
            .save(1, "a.mp4", Bytes::from_static(b"old"))
            .await
            .expect("first save");
        let second = fs
            .save(1, "a.mp4", Bytes::from_static(b"new"))
            .await
            .expect("second save");
        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).expect("read back"), b"new");
    }

    #[tokio::test]
    async fn path_for_strips_directory_components() {
        let fs = store("strip").await;
        let path = fs.path_for(2, "../../etc/passwd");
        assert!(path.ends_with("user2_passwd"));
    }

    #[tokio::test]
    async fn load_missing_file_is_not_found() {
        let fs = store("missing").await;
        let err = fs
            .load(fs.path_for(1, "gone.mp4").to_str().expect("utf8 path"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
