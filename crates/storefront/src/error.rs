//! Error taxonomy at the GraphQL boundary.
//!
//! User-correctable conditions travel as `checkoutUserErrors` data inside
//! a payload; everything here is a hard failure surfaced as a GraphQL
//! error with a machine-readable `code` extension:
//!
//! - `VARIANT_NOT_FOUND` - an add referenced a variant absent from the
//!   catalog
//! - `CHECKOUT_NOT_INITIALIZED` - a line-item mutation before create
//! - `STORE_UNAVAILABLE` / `STORE_MALFORMED` - the persistence medium
//!   failed or holds an unparseable document
//!
//! Invalid pagination cursors never reach this boundary; the pager
//! recovers them by restarting from the top of the collection.

use async_graphql::{Error, ErrorExtensions};

use crate::services::CheckoutError;
use crate::store::StoreError;

impl ErrorExtensions for StoreError {
    fn extend(&self) -> Error {
        let code = match self {
            Self::Unavailable(_) => "STORE_UNAVAILABLE",
            Self::Malformed(_) => "STORE_MALFORMED",
        };
        Error::new(self.to_string()).extend_with(|_, extensions| extensions.set("code", code))
    }
}

impl ErrorExtensions for CheckoutError {
    fn extend(&self) -> Error {
        let code = match self {
            Self::VariantNotFound(_) => "VARIANT_NOT_FOUND",
            Self::NotInitialized => "CHECKOUT_NOT_INITIALIZED",
            Self::Store(err) => return err.extend(),
        };
        Error::new(self.to_string()).extend_with(|_, extensions| extensions.set("code", code))
    }
}
