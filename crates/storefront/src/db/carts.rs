//! Cart repository for database operations.

use sqlx::PgPool;
use tracing::instrument;

use plaza_core::{CartId, StoreId, UserId};

use super::RepositoryError;
use crate::models::{Cart, LineItem, Product};

/// Errors that can occur when mutating a cart.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// The product belongs to a different store than the cart's items.
    #[error("cart is for store {cart_store}, product belongs to store {product_store}")]
    CrossStore {
        /// Store the cart already buys from.
        cart_store: StoreId,
        /// Store the rejected product belongs to.
        product_store: StoreId,
    },

    /// The cart does not exist.
    #[error("cart not found")]
    CartNotFound,

    /// Underlying repository failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for CartError {
    fn from(e: sqlx::Error) -> Self {
        Self::Repository(RepositoryError::Database(e))
    }
}

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create an empty cart for a session, optionally owned by a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, user_id: Option<UserId>) -> Result<Cart, RepositoryError> {
        let cart = sqlx::query_as::<_, Cart>(
            r"
            INSERT INTO storefront.cart (user_id)
            VALUES ($1)
            RETURNING id, store_id, user_id, created_at
            ",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(cart)
    }

    /// Get a cart by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CartId) -> Result<Option<Cart>, RepositoryError> {
        let cart = sqlx::query_as::<_, Cart>(
            r"
            SELECT id, store_id, user_id, created_at
            FROM storefront.cart
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(cart)
    }

    /// Add a product to a cart, or increment its quantity if already present.
    ///
    /// Enforces the single-store-per-cart invariant: the first add pins the
    /// cart to the product's store, subsequent adds must match it. The unit
    /// price is snapshotted from the product at add time; a repeat add keeps
    /// the original snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CrossStore` if the product belongs to a different
    /// store than the cart, `CartError::CartNotFound` if the cart does not
    /// exist, or a wrapped `RepositoryError` on database failure.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_product(
        &self,
        cart_id: CartId,
        product: &Product,
        quantity: i32,
    ) -> Result<LineItem, CartError> {
        let mut tx = self.pool.begin().await?;

        let cart = sqlx::query_as::<_, Cart>(
            r"
            SELECT id, store_id, user_id, created_at
            FROM storefront.cart
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(cart_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CartError::CartNotFound)?;

        match cart.store_id {
            Some(cart_store) if cart_store != product.store_id => {
                return Err(CartError::CrossStore {
                    cart_store,
                    product_store: product.store_id,
                });
            }
            Some(_) => {}
            None => {
                // First item pins the cart to the product's store
                sqlx::query(
                    r"
                    UPDATE storefront.cart
                    SET store_id = $1
                    WHERE id = $2
                    ",
                )
                .bind(product.store_id)
                .bind(cart_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        let item = sqlx::query_as::<_, LineItem>(
            r"
            INSERT INTO storefront.line_item (product_id, cart_id, quantity, price)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (cart_id, product_id) WHERE cart_id IS NOT NULL
            DO UPDATE SET quantity = storefront.line_item.quantity + EXCLUDED.quantity
            RETURNING id, product_id, cart_id, order_id, quantity, price
            ",
        )
        .bind(product.id)
        .bind(cart_id)
        .bind(quantity)
        .bind(product.price)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(item)
    }

    /// The cart's current line items, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn line_items(&self, cart_id: CartId) -> Result<Vec<LineItem>, RepositoryError> {
        let items = sqlx::query_as::<_, LineItem>(
            r"
            SELECT id, product_id, cart_id, order_id, quantity, price
            FROM storefront.line_item
            WHERE cart_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(cart_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}
