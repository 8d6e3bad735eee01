//! Plaza Core - Shared types library.
//!
//! This crate provides common types used across all Plaza components:
//! - `storefront` - Public-facing shopper site (carts, checkout, order lookup)
//! - `admin` - Platform administration panel (order/store status management)
//! - `cli` - Command-line tools for migrations and bootstrap
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, statuses,
//!   confirmation tokens, and notification job payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
