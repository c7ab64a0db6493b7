//! JSON file store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{DocumentStore, StoreError};
use crate::types::Document;

/// Persists the document as pretty-printed JSON at a fixed path.
///
/// Saves go through a sibling temp file followed by a rename, so an
/// interrupted write leaves the previous document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".tmp");
        PathBuf::from(path)
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<Document, StoreError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let document = serde_json::from_str(&contents)?;
        Ok(document)
    }

    async fn save(&self, document: &Document) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(document)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, contents).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        tracing::debug!(path = %self.path.display(), "document saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn sample_document() -> Document {
        Document {
            products: seed::sample_catalog(),
            checkout: Some(seed::default_checkout()),
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("index.json"));

        let document = sample_document();
        store.save(&document).await.expect("save");
        let loaded = store.load().await.expect("load");

        assert_eq!(loaded.products, document.products);
        assert_eq!(loaded.checkout, document.checkout);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        let err = store.load().await.expect_err("should fail");
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_load_garbage_is_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.json");
        std::fs::write(&path, "{ not json").expect("write");

        let store = JsonFileStore::new(path);
        let err = store.load().await.expect_err("should fail");
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.json");
        let store = JsonFileStore::new(&path);

        let document = sample_document();
        store.save(&document).await.expect("save");

        // A save against an unwritable location fails without touching the
        // original file.
        let broken = JsonFileStore::new(dir.path().join("no-such-dir").join("index.json"));
        let err = broken.save(&Document::default()).await.expect_err("should fail");
        assert!(matches!(err, StoreError::Unavailable(_)));

        let loaded = store.load().await.expect("load");
        assert_eq!(loaded.products.len(), document.products.len());
    }

    #[tokio::test]
    async fn test_save_is_last_write_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("index.json"));

        let mut first = sample_document();
        first.checkout = None;
        let second = sample_document();

        store.save(&first).await.expect("save first");
        store.save(&second).await.expect("save second");

        let loaded = store.load().await.expect("load");
        assert!(loaded.checkout.is_some());
    }
}
