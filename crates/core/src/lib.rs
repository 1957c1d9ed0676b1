//! Roastline Core - Shared types library.
//!
//! This crate provides common types used across all Roastline components:
//! - `storefront` - Public-facing e-commerce site
//! - `cli` - Command-line tools for seeding and cart inspection
//!
//! # Architecture
//!
//! The core crate contains only types and pure domain logic - no I/O, no file
//! access, no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, and catalog records
//! - [`cart`] - The cart value type with its derived totals
//! - [`catalog`] - Catalog filter and search predicates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{Cart, CartSummary, LineItem};
pub use catalog::ProductFilter;
pub use types::*;
