//! Plaza Admin - store lifecycle and order management.
//!
//! Administrators approve or decline stores, disable them, and move orders
//! through their lifecycle. Store approval and decline notify the store
//! owner via the shared notification queue; order status changes never
//! notify.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
