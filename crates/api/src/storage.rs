//! Filesystem store for uploaded product images.
//!
//! Files live under one upload directory and are served read-only at
//! [`PUBLIC_PREFIX`]. Stored names are generated as
//! `<millisecond timestamp>-<random integer>.<extension>`; collisions are
//! not guaranteed impossible but are negligible at this scale.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::Rng;

/// URL prefix uploaded files are served under.
pub const PUBLIC_PREFIX: &str = "/uploads-menggaris";

/// Asset store rooted at the configured upload directory.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: Arc<PathBuf>,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// The upload directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(self.root.as_ref()).await
    }

    /// Write validated upload bytes under a generated filename and return
    /// that filename. The caller has already checked type and size.
    pub async fn store(&self, extension: &str, bytes: &[u8]) -> std::io::Result<String> {
        self.ensure_root().await?;

        let stamp = chrono::Utc::now().timestamp_millis();
        let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
        let filename = format!("{stamp}-{suffix}.{extension}");

        tokio::fs::write(self.root.join(&filename), bytes).await?;
        Ok(filename)
    }

    /// Remove a stored file. Idempotent: a missing file is not an error.
    pub async fn delete(&self, filename: &str) -> std::io::Result<()> {
        // Refuse names that could escape the upload root.
        if filename.contains('/') || filename.contains("..") {
            return Ok(());
        }

        match tokio::fs::remove_file(self.root.join(filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Whether a stored file currently exists.
    pub async fn contains(&self, filename: &str) -> bool {
        tokio::fs::try_exists(self.root.join(filename))
            .await
            .unwrap_or(false)
    }

    /// Best-effort removal of a batch of orphaned files after a product
    /// mutation. Each deletion is attempted once; failures are logged and
    /// never surfaced to the caller.
    pub async fn cleanup(&self, filenames: &[String]) {
        for filename in filenames {
            match self.delete(filename).await {
                Ok(()) => tracing::debug!(%filename, "Removed orphaned image"),
                Err(error) => {
                    tracing::warn!(%filename, %error, "Failed to remove orphaned image");
                }
            }
        }
    }

    /// Stable public path for a stored filename.
    pub fn public_url(&self, filename: &str) -> String {
        format!("{PUBLIC_PREFIX}/{filename}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, AssetStore) {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = AssetStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn test_store_generates_timestamped_name() {
        let (_dir, store) = temp_store();

        let filename = store.store("png", b"bytes").await.unwrap();
        assert!(filename.ends_with(".png"));

        // "<millis>-<random>" stem.
        let stem = filename.strip_suffix(".png").unwrap();
        let (millis, random) = stem.split_once('-').expect("stem should contain a dash");
        assert!(millis.parse::<i64>().is_ok());
        assert!(random.parse::<u32>().is_ok());

        assert!(store.contains(&filename).await);
    }

    #[tokio::test]
    async fn test_store_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path().join("nested").join("uploads"));

        let filename = store.store("jpg", b"bytes").await.unwrap();
        assert!(store.contains(&filename).await);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_dir, store) = temp_store();
        let filename = store.store("gif", b"bytes").await.unwrap();

        store.delete(&filename).await.unwrap();
        assert!(!store.contains(&filename).await);

        // Second delete of the same name must not error.
        store.delete(&filename).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_ignores_path_traversal() {
        let (_dir, store) = temp_store();
        store.delete("../outside.txt").await.unwrap();
        store.delete("a/b.png").await.unwrap();
    }

    #[tokio::test]
    async fn test_cleanup_swallows_missing_files() {
        let (_dir, store) = temp_store();
        let kept = store.store("png", b"kept").await.unwrap();
        let removed = store.store("png", b"removed").await.unwrap();

        store
            .cleanup(&[removed.clone(), "already-gone.jpg".to_string()])
            .await;

        assert!(store.contains(&kept).await);
        assert!(!store.contains(&removed).await);
    }

    #[test]
    fn test_public_url_prefix() {
        let store = AssetStore::new("uploads-menggaris");
        assert_eq!(
            store.public_url("170-42.png"),
            "/uploads-menggaris/170-42.png"
        );
    }
}
