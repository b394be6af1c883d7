//! Storage for uploaded media files.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

/// Where uploads are written. Paths are relative to the storage root and
/// already validated by `campus_core::media`.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Write `content` at `relative`, creating parent directories.
    async fn save(&self, relative: &str, content: &[u8]) -> std::io::Result<()>;
}

/// Files on the local disk under `MEDIA_ROOT`, served back by `ServeDir`.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn save(&self, relative: &str, content: &[u8]) -> std::io::Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_creates_nested_folders() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = LocalMediaStorage::new(dir.path());

        storage
            .save("faculty/banners/portrait-1.png", b"png-bytes")
            .await
            .expect("save should succeed");

        let written = std::fs::read(dir.path().join("faculty/banners/portrait-1.png"))
            .expect("file should exist");
        assert_eq!(written, b"png-bytes");
    }
}
