//! Core types for Mockfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod identify;
pub mod money;

pub use identify::{CursorKeyed, Identifiable};
pub use money::{CurrencyCode, Money};
