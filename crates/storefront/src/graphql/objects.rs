//! Resolver-backed parts of the object types.
//!
//! The embedded collections (product images and variants, checkout line
//! items) surface as full-list connections: every element gets an edge and
//! a cursor, the page info reports no further pages, and the `first`
//! argument is accepted for API compatibility but never slices the list.

use async_graphql::{ComplexObject, Context, ErrorExtensions, ID, Interface};

use crate::pagination::Connection;
use crate::services::NodeEntity;
use crate::state::AppState;
use crate::types::{Checkout, Image, LineItem, Product, Variant};

/// Any entity addressable through the global `node` query.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "&ID"))]
pub enum Node {
    Product(Product),
    Checkout(Checkout),
    LineItem(LineItem),
}

impl From<NodeEntity> for Node {
    fn from(entity: NodeEntity) -> Self {
        match entity {
            NodeEntity::Product(product) => Self::Product(product),
            NodeEntity::Checkout(checkout) => Self::Checkout(checkout),
        }
    }
}

#[ComplexObject]
impl Product {
    /// The product's images.
    async fn images(
        &self,
        #[graphql(name = "first")] _first: Option<i32>,
    ) -> Connection<Image> {
        Connection::embedded(self.images.clone())
    }

    /// The product's variants, each carrying the owning handle and the
    /// product's primary image.
    async fn variants(
        &self,
        #[graphql(name = "first")] _first: Option<i32>,
    ) -> Connection<Variant> {
        Connection::embedded(self.enriched_variants())
    }
}

#[ComplexObject]
impl Variant {
    /// The product this variant belongs to, resolved by handle.
    async fn product(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Product>> {
        resolve_product_by_handle(ctx, self.product_handle.as_deref()).await
    }
}

#[ComplexObject]
impl LineItem {
    /// The product the denormalized variant belongs to.
    async fn product(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Product>> {
        resolve_product_by_handle(ctx, self.variant.product_handle.as_deref()).await
    }
}

#[ComplexObject]
impl Checkout {
    /// The cart's line items.
    async fn line_items(
        &self,
        #[graphql(name = "first")] _first: Option<i32>,
    ) -> Connection<LineItem> {
        Connection::embedded(self.line_items.clone())
    }
}

async fn resolve_product_by_handle(
    ctx: &Context<'_>,
    handle: Option<&str>,
) -> async_graphql::Result<Option<Product>> {
    let Some(handle) = handle else {
        return Ok(None);
    };
    let state = ctx.data::<AppState>()?;
    state
        .catalog()
        .product_by_handle(handle)
        .await
        .map_err(|err| err.extend())
}
