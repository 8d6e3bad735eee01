//! Cart and line-item domain types.

use chrono::{DateTime, Utc};

use plaza_core::{CartId, LineItemId, OrderId, Price, ProductId, StoreId, UserId};

/// A shopper's in-progress cart.
///
/// Created on the first add-to-cart action and held in the session. All
/// items in a cart share the cart's store; `store_id` is set when the first
/// product is added. Checkout consumes the cart (re-parents its line items
/// onto the new order) but never deletes it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Cart {
    /// Unique cart ID.
    pub id: CartId,
    /// The store this cart buys from. `None` until the first item is added.
    pub store_id: Option<StoreId>,
    /// Owning user, when the shopper is signed in.
    pub user_id: Option<UserId>,
    /// When the cart was created.
    pub created_at: DateTime<Utc>,
}

/// An immutable quantity+price snapshot of one product.
///
/// Owned by a cart before checkout and by an order after; never both. Once
/// `order_id` is set it is permanent.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LineItem {
    /// Unique line-item ID.
    pub id: LineItemId,
    /// The product this snapshot was taken from.
    pub product_id: ProductId,
    /// Owning cart (pre-checkout).
    pub cart_id: Option<CartId>,
    /// Owning order (post-checkout).
    pub order_id: Option<OrderId>,
    /// Units purchased.
    pub quantity: i32,
    /// Unit price at the time the product was added to the cart.
    pub price: Price,
}

impl LineItem {
    /// The extended price (`price * quantity`) for this line.
    #[must_use]
    pub fn extended_price(&self) -> Price {
        self.price.extended(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_extended_price() {
        let item = LineItem {
            id: LineItemId::new(1),
            product_id: ProductId::new(1),
            cart_id: Some(CartId::new(1)),
            order_id: None,
            quantity: 3,
            price: Price::new(Decimal::from(100)),
        };
        assert_eq!(item.extended_price().amount(), Decimal::from(300));
    }
}
