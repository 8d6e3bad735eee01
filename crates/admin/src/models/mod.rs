//! Data models for the admin panel.

pub mod order;
pub mod session;
pub mod store;

pub use order::Order;
pub use session::{CurrentAdmin, keys as session_keys};
pub use store::Store;
