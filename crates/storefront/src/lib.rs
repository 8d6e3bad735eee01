//! Plaza Storefront library.
//!
//! This crate provides the shopper-facing functionality as a library,
//! allowing it to be tested and reused: carts, the checkout workflow, and
//! guest order lookup by confirmation token.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
