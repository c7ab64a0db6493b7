//! Catalog queries.

use std::sync::Arc;

use crate::pagination::{Connection, PageArgs, paginate};
use crate::store::{DocumentStore, StoreError};
use crate::types::Product;

/// Read-only access to the product catalog.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn DocumentStore>,
}

impl CatalogService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Page through the catalog in stored order.
    ///
    /// # Errors
    ///
    /// [`StoreError`] if the document cannot be read.
    pub async fn list_products(&self, args: &PageArgs) -> Result<Connection<Product>, StoreError> {
        let document = self.store.load().await?;
        Ok(paginate(&document.products, args))
    }

    /// Find a product by handle.
    ///
    /// Built atop the product listing at full width and then filtered - a
    /// linear scan, not an indexed lookup.
    ///
    /// # Errors
    ///
    /// [`StoreError`] if the document cannot be read.
    pub async fn product_by_handle(&self, handle: &str) -> Result<Option<Product>, StoreError> {
        let document = self.store.load().await?;
        let args = PageArgs {
            first: Some(i32::try_from(document.products.len()).unwrap_or(i32::MAX)),
            after_cursor: None,
        };
        let connection = paginate(&document.products, &args);
        Ok(connection
            .edges
            .into_iter()
            .map(|edge| edge.node)
            .find(|product| product.handle == handle))
    }
}
