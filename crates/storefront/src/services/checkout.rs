//! Checkout orchestration.
//!
//! Every mutating operation is one read-modify-write cycle against the
//! injected store: load the document, reconcile the line items, recompute
//! totals, persist the whole document, return the checkout. There is no
//! lock around the cycle - concurrent writers race and the last save wins.

use std::sync::Arc;

use async_graphql::ID;
use thiserror::Error;

use super::reconcile;
use crate::seed;
use crate::store::{DocumentStore, StoreError};
use crate::types::{
    Checkout, CheckoutPayload, LineItemInput, LineItemUpdateInput,
};

/// Failures of checkout operations.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// An add request referenced a variant no catalog product owns.
    #[error("variant {0} is not in the catalog")]
    VariantNotFound(String),

    /// A line-item mutation arrived before `checkoutCreate`.
    #[error("checkout has not been created")]
    NotInitialized,

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Service behind the `checkout*` mutations.
#[derive(Clone)]
pub struct CheckoutService {
    store: Arc<dyn DocumentStore>,
}

impl CheckoutService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create the checkout if it does not exist yet.
    ///
    /// Idempotent: a checkout with a non-blank id is returned unchanged
    /// without touching the store; otherwise the fixed empty-cart template
    /// is persisted. There is no error path besides the store itself.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::Store`] if the document cannot be read or written.
    pub async fn create(&self) -> Result<CheckoutPayload, CheckoutError> {
        let mut document = self.store.load().await?;
        match document.checkout.take() {
            Some(checkout) if !checkout.id.is_empty() => Ok(Self::payload(checkout)),
            _ => {
                let checkout = seed::default_checkout();
                document.checkout = Some(checkout.clone());
                self.store.save(&document).await?;
                tracing::info!(checkout_id = checkout.id.as_str(), "checkout created");
                Ok(Self::payload(checkout))
            }
        }
    }

    /// Add line items, merging requests for variants already in the cart.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::NotInitialized`] before `create`,
    /// [`CheckoutError::VariantNotFound`] for an unknown variant,
    /// [`CheckoutError::Store`] on store failure.
    pub async fn add_line_items(
        &self,
        checkout_id: &ID,
        items: Vec<LineItemInput>,
    ) -> Result<CheckoutPayload, CheckoutError> {
        tracing::debug!(
            checkout_id = checkout_id.as_str(),
            requests = items.len(),
            "adding line items"
        );
        let mut document = self.store.load().await?;
        let mut checkout = document.checkout.take().ok_or(CheckoutError::NotInitialized)?;

        checkout.line_items =
            reconcile::merge_add(checkout.line_items, &document.products, items)?;
        Self::apply_totals(&mut checkout);

        document.checkout = Some(checkout.clone());
        self.store.save(&document).await?;
        Ok(Self::payload(checkout))
    }

    /// Update line-item quantities; a quantity of zero removes the item.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::NotInitialized`] before `create`,
    /// [`CheckoutError::Store`] on store failure.
    pub async fn update_line_items(
        &self,
        checkout_id: &ID,
        items: Vec<LineItemUpdateInput>,
    ) -> Result<CheckoutPayload, CheckoutError> {
        tracing::debug!(
            checkout_id = checkout_id.as_str(),
            requests = items.len(),
            "updating line items"
        );
        let mut document = self.store.load().await?;
        let mut checkout = document.checkout.take().ok_or(CheckoutError::NotInitialized)?;

        checkout.line_items = reconcile::apply_updates(checkout.line_items, &items);
        Self::apply_totals(&mut checkout);

        document.checkout = Some(checkout.clone());
        self.store.save(&document).await?;
        Ok(Self::payload(checkout))
    }

    /// Remove line items by id.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::NotInitialized`] before `create`,
    /// [`CheckoutError::Store`] on store failure.
    pub async fn remove_line_items(
        &self,
        checkout_id: &ID,
        line_item_ids: Vec<ID>,
    ) -> Result<CheckoutPayload, CheckoutError> {
        tracing::debug!(
            checkout_id = checkout_id.as_str(),
            requests = line_item_ids.len(),
            "removing line items"
        );
        let mut document = self.store.load().await?;
        let mut checkout = document.checkout.take().ok_or(CheckoutError::NotInitialized)?;

        checkout.line_items = reconcile::remove_items(checkout.line_items, &line_item_ids);
        Self::apply_totals(&mut checkout);

        document.checkout = Some(checkout.clone());
        self.store.save(&document).await?;
        Ok(Self::payload(checkout))
    }

    /// Recompute subtotal and total from the line items. Tax is never
    /// computed; `total_tax_v2` keeps its stored value.
    fn apply_totals(checkout: &mut Checkout) {
        let total = reconcile::total_price(&checkout.line_items);
        checkout.subtotal_price_v2.amount = total;
        checkout.total_price_v2.amount = total;
    }

    fn payload(checkout: Checkout) -> CheckoutPayload {
        CheckoutPayload {
            checkout,
            checkout_user_errors: Vec::new(),
        }
    }
}
