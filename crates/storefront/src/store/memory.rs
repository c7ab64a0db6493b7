//! In-memory store double.

use std::sync::RwLock;

use async_trait::async_trait;

use super::{DocumentStore, StoreError};
use crate::types::Document;

/// An in-memory [`DocumentStore`] for tests and experiments.
///
/// Behaves like the file store minus the disk: whole-document load and
/// save, last writer wins.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<Document>,
}

impl MemoryStore {
    /// Create a store holding the given document.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<Document, StoreError> {
        let guard = self
            .document
            .read()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, document: &Document) -> Result<(), StoreError> {
        let mut guard = self
            .document
            .write()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        *guard = document.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[tokio::test]
    async fn test_load_returns_saved_document() {
        let store = MemoryStore::default();
        let document = Document {
            products: seed::sample_catalog(),
            checkout: None,
        };

        store.save(&document).await.expect("save");
        let loaded = store.load().await.expect("load");
        assert_eq!(loaded.products, document.products);
    }
}
