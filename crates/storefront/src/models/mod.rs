//! Domain types for the storefront.
//!
//! These types represent validated domain objects separate from raw request
//! or database row shapes.

pub mod address;
pub mod cart;
pub mod order;
pub mod product;
pub mod session;

pub use address::{AddressTag, CustomerAddress};
pub use cart::{Cart, LineItem};
pub use order::Order;
pub use product::Product;
pub use session::{CurrentUser, keys as session_keys};
