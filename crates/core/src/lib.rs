//! Mercadito Core - Shared types library.
//!
//! This crate provides common types used across all Mercadito components:
//! - `shop` - Commerce API service (catalog, session carts, checkout)
//! - `storefront` - Server-rendered storefront that mirrors the shop cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Everything
//! that crosses the wire between the storefront and the shop is defined here,
//! so both sides agree on the JSON shapes.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, decimal prices, products, carts, and orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
