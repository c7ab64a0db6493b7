//! Mockfront Core - Shared types library.
//!
//! This crate provides common types used across all Mockfront components:
//! - `storefront` - The mock storefront GraphQL API server
//! - `cli` - Command-line tools for seeding and resetting the data file
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no store access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Monetary values and the entity capability traits

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
