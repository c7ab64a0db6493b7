//! GraphQL schema.

pub mod mutation;
pub mod objects;
pub mod query;

use async_graphql::{EmptySubscription, Schema};

use crate::state::AppState;

pub use mutation::MutationRoot;
pub use objects::Node;
pub use query::QueryRoot;

/// The storefront schema type.
pub type StorefrontSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the application state attached.
#[must_use]
pub fn build_schema(state: AppState) -> StorefrontSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
