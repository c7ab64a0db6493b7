//! Document persistence.
//!
//! The whole application state is one [`Document`](crate::types::Document)
//! persisted at whole-document granularity: every mutation loads it,
//! computes the complete next state, and writes it back. The store is
//! injected as a trait object so the services never know whether they are
//! talking to a file or an in-memory double.
//!
//! There is deliberately no locking around the read-modify-write cycle:
//! two concurrent writers race and the last save wins. Sequential callers
//! observe single-writer behavior.

mod json_file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::Document;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors from the persistence medium. Hard failures; retries are the
/// caller's concern.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying medium could not be read or written.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The stored document exists but cannot be parsed.
    #[error("store document malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}

/// Load/save access to the single persisted document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the current document.
    async fn load(&self) -> Result<Document, StoreError>;

    /// Replace the stored document. A failed save must leave the previous
    /// document intact.
    async fn save(&self, document: &Document) -> Result<(), StoreError>;
}
