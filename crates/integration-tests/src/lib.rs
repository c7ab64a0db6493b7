//! End-to-end test support for Mockfront.
//!
//! [`TestContext`] wires the real GraphQL schema to an in-memory store so
//! tests can execute full operations without touching the file system.
//!
//! # Example
//!
//! ```rust,no_run
//! use mockfront_integration_tests::TestContext;
//!
//! # async fn example() {
//! let ctx = TestContext::new();
//! let data = ctx.execute_ok("{ hello }").await;
//! assert_eq!(data["hello"], "Hello world!");
//! # }
//! ```

use std::sync::Arc;

use mockfront_storefront::config::StorefrontConfig;
use mockfront_storefront::graphql::{StorefrontSchema, build_schema};
use mockfront_storefront::seed;
use mockfront_storefront::state::AppState;
use mockfront_storefront::store::{DocumentStore, MemoryStore};
use mockfront_storefront::types::Document;

/// A schema over a seeded in-memory store.
pub struct TestContext {
    schema: StorefrontSchema,
    store: Arc<MemoryStore>,
}

impl TestContext {
    /// Context over the sample catalog with an uncreated checkout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_document(Document {
            products: seed::sample_catalog(),
            checkout: None,
        })
    }

    /// Context over an arbitrary starting document.
    #[must_use]
    pub fn with_document(document: Document) -> Self {
        let store = Arc::new(MemoryStore::new(document));
        let config = StorefrontConfig {
            host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
            port: 0,
            data_file: "unused".into(),
        };
        let state = AppState::new(config, Arc::clone(&store) as Arc<dyn DocumentStore>);
        Self {
            schema: build_schema(state),
            store,
        }
    }

    /// The backing store, for direct inspection.
    #[must_use]
    pub fn store(&self) -> &Arc<MemoryStore> {
        &self.store
    }

    /// Execute an operation and return the raw response.
    pub async fn execute(&self, operation: &str) -> async_graphql::Response {
        self.schema.execute(operation).await
    }

    /// Execute an operation, assert it succeeded, and return its data as
    /// JSON.
    ///
    /// # Panics
    ///
    /// Panics if the response carries errors.
    pub async fn execute_ok(&self, operation: &str) -> serde_json::Value {
        let response = self.execute(operation).await;
        assert!(
            response.errors.is_empty(),
            "operation failed: {:?}\n{operation}",
            response.errors
        );
        serde_json::to_value(&response.data).expect("data serializes")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
