//! Global id lookup.

use std::sync::Arc;

use mockfront_core::Identifiable;

use crate::store::{DocumentStore, StoreError};
use crate::types::{Checkout, Product};

/// An entity found by global id.
#[derive(Debug, Clone)]
pub enum NodeEntity {
    Product(Product),
    Checkout(Checkout),
}

/// Resolves a global id by scanning the document's top-level collections
/// in a fixed order: products first, then the checkout singleton.
#[derive(Clone)]
pub struct NodeResolver {
    store: Arc<dyn DocumentStore>,
}

impl NodeResolver {
    /// Create a resolver over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find the entity with the given id, or `None`. Pure read.
    ///
    /// # Errors
    ///
    /// [`StoreError`] if the document cannot be read.
    pub async fn resolve(&self, id: &str) -> Result<Option<NodeEntity>, StoreError> {
        let document = self.store.load().await?;

        if let Some(product) = document.products.iter().find(|p| p.node_id() == id) {
            return Ok(Some(NodeEntity::Product(product.clone())));
        }

        Ok(document
            .checkout
            .filter(|checkout| checkout.node_id() == id)
            .map(NodeEntity::Checkout))
    }
}
