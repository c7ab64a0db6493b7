//! Query root.

use async_graphql::{Context, ErrorExtensions, ID, Object};

use super::objects::Node;
use crate::pagination::{Connection, PageArgs};
use crate::state::AppState;
use crate::types::Product;

/// Root query object.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Smoke-test field.
    async fn hello(&self) -> &'static str {
        "Hello world!"
    }

    /// Page through the product catalog.
    async fn products(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after_cursor: Option<String>,
    ) -> async_graphql::Result<Connection<Product>> {
        let state = ctx.data::<AppState>()?;
        state
            .catalog()
            .list_products(&PageArgs {
                first,
                after_cursor,
            })
            .await
            .map_err(|err| err.extend())
    }

    /// Find a product by its URL handle.
    async fn product_by_handle(
        &self,
        ctx: &Context<'_>,
        handle: String,
    ) -> async_graphql::Result<Option<Product>> {
        let state = ctx.data::<AppState>()?;
        state
            .catalog()
            .product_by_handle(&handle)
            .await
            .map_err(|err| err.extend())
    }

    /// Resolve any entity by its global id.
    async fn node(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Node>> {
        let state = ctx.data::<AppState>()?;
        let entity = state
            .nodes()
            .resolve(id.as_str())
            .await
            .map_err(|err| err.extend())?;
        Ok(entity.map(Node::from))
    }
}
