//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{CatalogService, CheckoutService, NodeResolver};
use crate::store::DocumentStore;

/// Application state shared across all handlers and resolvers.
///
/// Cheaply cloneable via `Arc`. The store handle is injected once here and
/// threaded into every service, so tests can swap in an in-memory double.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Arc<dyn DocumentStore>,
    catalog: CatalogService,
    checkout: CheckoutService,
    nodes: NodeResolver,
}

impl AppState {
    /// Create application state over the given store.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: Arc<dyn DocumentStore>) -> Self {
        let catalog = CatalogService::new(Arc::clone(&store));
        let checkout = CheckoutService::new(Arc::clone(&store));
        let nodes = NodeResolver::new(Arc::clone(&store));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog,
                checkout,
                nodes,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the shared document store handle.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.inner.store
    }

    /// Get a reference to the catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Get a reference to the checkout service.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutService {
        &self.inner.checkout
    }

    /// Get a reference to the node resolver.
    #[must_use]
    pub fn nodes(&self) -> &NodeResolver {
        &self.inner.nodes
    }
}
