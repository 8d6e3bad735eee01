//! Order domain type.

use chrono::{DateTime, Utc};

use plaza_core::{AddressId, ConfirmationToken, Email, OrderId, OrderStatus, Price, StoreId, UserId};

/// A completed purchase.
///
/// Orders are created atomically at checkout and immutable afterwards except
/// for the administrator-controlled `status` field and explicit
/// administrative edits. `total_cost` is fixed at creation time and never
/// recomputed from line items. The confirmation token is globally unique and
/// is the sole lookup key for guest order views.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Purchasing user. `None` for guest checkouts.
    pub user_id: Option<UserId>,
    /// Email submitted at guest checkout, retained for confirmation
    /// lookup/display only. `None` when the purchaser was signed in.
    pub guest_email: Option<Email>,
    /// The store the purchase was made from. Matches the store of every
    /// line item the order was built from.
    pub store_id: StoreId,
    /// Administrator-controlled lifecycle label; `pending` at creation.
    pub status: OrderStatus,
    /// Shipping address, when submitted at checkout.
    pub shipping_address_id: Option<AddressId>,
    /// Billing address, when submitted at checkout.
    pub billing_address_id: Option<AddressId>,
    /// Unique guest-accessible lookup key.
    pub confirmation_token: ConfirmationToken,
    /// Opaque payment reference accepted at checkout.
    pub payment_reference: String,
    /// Sum of line-item `price * quantity` at submission time.
    pub total_cost: Price,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
}
