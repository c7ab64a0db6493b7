//! Line-item reconciliation.
//!
//! Pure transforms from a checkout's current line items plus a requested
//! change to the next line-item set. Each transform computes the complete
//! next state before anything is persisted, so a failure here never leaves
//! a half-mutated document behind.

use async_graphql::ID;
use rust_decimal::Decimal;

use super::checkout::CheckoutError;
use crate::types::{LineItem, LineItemInput, LineItemUpdateInput, Product, Variant};

/// Suffix appended to a variant id to derive its line-item id.
const LINE_ITEM_SUFFIX: &str = "__LI";

/// Derive the line-item id for a variant.
#[must_use]
pub fn line_item_id(variant_id: &str) -> ID {
    ID::from(format!("{variant_id}{LINE_ITEM_SUFFIX}"))
}

/// Merge add requests into the current line items.
///
/// A request for a variant already in the cart bumps that line item's
/// quantity by exactly one - the requested quantity is ignored on merge.
/// Remaining requests become new line items appended in request order,
/// denormalizing the owning product's title, handle, primary image and the
/// variant's current price.
///
/// # Errors
///
/// [`CheckoutError::VariantNotFound`] if a requested variant id belongs to
/// no catalog product.
pub fn merge_add(
    current: Vec<LineItem>,
    catalog: &[Product],
    requests: Vec<LineItemInput>,
) -> Result<Vec<LineItem>, CheckoutError> {
    let mut line_items = current;
    let mut pending = requests;

    for item in &mut line_items {
        if let Some(index) = pending
            .iter()
            .position(|request| request.variant_id == item.variant.id)
        {
            item.quantity += 1;
            pending.remove(index);
        }
    }

    for request in pending {
        let (product, variant) = find_variant(catalog, request.variant_id.as_str())
            .ok_or_else(|| CheckoutError::VariantNotFound(request.variant_id.to_string()))?;

        let mut variant = variant.clone();
        variant.image = product.primary_image().cloned();
        variant.product_handle = Some(product.handle.clone());

        line_items.push(LineItem {
            id: line_item_id(request.variant_id.as_str()),
            quantity: request.quantity,
            title: product.title.clone(),
            unit_price: variant.price_v2,
            variant,
        });
    }

    Ok(line_items)
}

/// Apply quantity updates by line-item id.
///
/// Unknown ids are a silent no-op. Quantities are set first; a single
/// rebuild pass then drops every item whose quantity reached zero, so
/// removal can never skip a neighbor.
#[must_use]
pub fn apply_updates(
    mut line_items: Vec<LineItem>,
    updates: &[LineItemUpdateInput],
) -> Vec<LineItem> {
    for update in updates {
        if let Some(item) = line_items.iter_mut().find(|item| item.id == update.id) {
            item.quantity = update.quantity;
        }
    }
    line_items.retain(|item| item.quantity != 0);
    line_items
}

/// Remove line items by id. Absent ids are a silent no-op.
#[must_use]
pub fn remove_items(mut line_items: Vec<LineItem>, ids: &[ID]) -> Vec<LineItem> {
    line_items.retain(|item| !ids.contains(&item.id));
    line_items
}

/// Sum of `quantity x price-at-add-time` over the line items.
///
/// The price is each item's denormalized variant price; catalog changes
/// after add time never affect it. An empty list sums to zero.
#[must_use]
pub fn total_price(line_items: &[LineItem]) -> Decimal {
    line_items
        .iter()
        .map(|item| item.variant.price_v2.amount * Decimal::from(item.quantity))
        .sum()
}

fn find_variant<'a>(catalog: &'a [Product], variant_id: &str) -> Option<(&'a Product, &'a Variant)> {
    catalog
        .iter()
        .find_map(|product| product.variant(variant_id).map(|variant| (product, variant)))
}
