//! Application services.
//!
//! Each service holds a shared handle to the document store and exposes
//! the operations the GraphQL roots delegate to.

pub mod catalog;
pub mod checkout;
pub mod node;
pub mod reconcile;

pub use catalog::CatalogService;
pub use checkout::{CheckoutError, CheckoutService};
pub use node::{NodeEntity, NodeResolver};
