//! Order model for administration.

use chrono::{DateTime, Utc};
use serde::Serialize;

use plaza_core::{Email, OrderId, OrderStatus, Price, StoreId, UserId};

/// An order as the admin panel sees it.
///
/// Address and payment details stay in the storefront; administrators only
/// need identity, status and totals to run fulfilment.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub user_id: Option<UserId>,
    pub guest_email: Option<Email>,
    pub store_id: StoreId,
    pub status: OrderStatus,
    pub total_cost: Price,
    pub created_at: DateTime<Utc>,
}
