//! Mutation root.

use async_graphql::{Context, ErrorExtensions, ID, Object};

use crate::state::AppState;
use crate::types::{
    CheckoutCreateInput, CheckoutPayload, LineItemInput, LineItemUpdateInput,
};

/// Root mutation object.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create the checkout. Idempotent; a later call returns the existing
    /// checkout unchanged.
    async fn checkout_create(
        &self,
        ctx: &Context<'_>,
        input: Option<CheckoutCreateInput>,
    ) -> async_graphql::Result<CheckoutPayload> {
        // The input's id is accepted for API compatibility and ignored;
        // there is exactly one checkout.
        let _ = input;
        let state = ctx.data::<AppState>()?;
        state.checkout().create().await.map_err(|err| err.extend())
    }

    /// Add line items to the checkout, merging with items already present.
    async fn checkout_line_items_add(
        &self,
        ctx: &Context<'_>,
        checkout_id: ID,
        line_items: Vec<LineItemInput>,
    ) -> async_graphql::Result<CheckoutPayload> {
        let state = ctx.data::<AppState>()?;
        state
            .checkout()
            .add_line_items(&checkout_id, line_items)
            .await
            .map_err(|err| err.extend())
    }

    /// Update line-item quantities; a quantity of zero removes the item.
    async fn checkout_line_items_update(
        &self,
        ctx: &Context<'_>,
        checkout_id: ID,
        line_items: Vec<LineItemUpdateInput>,
    ) -> async_graphql::Result<CheckoutPayload> {
        let state = ctx.data::<AppState>()?;
        state
            .checkout()
            .update_line_items(&checkout_id, line_items)
            .await
            .map_err(|err| err.extend())
    }

    /// Remove line items from the checkout by id.
    async fn checkout_line_items_remove(
        &self,
        ctx: &Context<'_>,
        checkout_id: ID,
        line_item_ids: Vec<ID>,
    ) -> async_graphql::Result<CheckoutPayload> {
        let state = ctx.data::<AppState>()?;
        state
            .checkout()
            .remove_line_items(&checkout_id, line_item_ids)
            .await
            .map_err(|err| err.extend())
    }
}
