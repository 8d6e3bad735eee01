//! Product domain type.

use plaza_core::{Price, ProductId, StoreId};

/// A product listed by a store.
///
/// Only the fields the cart/checkout workflow consumes; full product CRUD
/// lives in the surrounding admin surfaces.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Store listing this product.
    pub store_id: StoreId,
    /// Display name.
    pub name: String,
    /// Current unit price. Line items snapshot this at add-to-cart time.
    pub price: Price,
}
