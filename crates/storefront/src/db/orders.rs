//! Order repository for database operations.

use sqlx::{PgConnection, PgPool};

use plaza_core::{CartId, ConfirmationToken, Email, OrderId, Price, StoreId, UserId};

use super::RepositoryError;
use crate::models::{LineItem, Order};

/// Column list shared by every order SELECT/RETURNING.
const ORDER_COLUMNS: &str = r"id, user_id, guest_email, store_id, status,
       shipping_address_id, billing_address_id,
       confirmation_token, payment_reference, total_cost, created_at";

/// Fields for a new order row, assembled by the checkout orchestrator.
#[derive(Debug)]
pub struct NewOrder {
    /// Purchasing user, `None` for guests.
    pub user_id: Option<UserId>,
    /// Guest-submitted email, `None` when signed in.
    pub guest_email: Option<Email>,
    /// Store the purchase was made from.
    pub store_id: StoreId,
    /// Shipping address created in the same transaction, if any.
    pub shipping_address_id: Option<plaza_core::AddressId>,
    /// Billing address created in the same transaction, if any.
    pub billing_address_id: Option<plaza_core::AddressId>,
    /// Collision-checked confirmation token.
    pub confirmation_token: ConfirmationToken,
    /// Opaque payment reference.
    pub payment_reference: String,
    /// Total fixed at checkout.
    pub total_cost: Price,
}

/// Repository for order reads outside the checkout transaction.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look an order up by its confirmation token.
    ///
    /// This is the guest path: no authentication, the token is the sole key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_confirmation_token(
        &self,
        token: &ConfirmationToken,
    ) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM storefront."order"
            WHERE confirmation_token = $1
            "#
        ))
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// List a user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM storefront."order"
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// The order's line items, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn line_items(&self, order_id: OrderId) -> Result<Vec<LineItem>, RepositoryError> {
        let items = sqlx::query_as::<_, LineItem>(
            r"
            SELECT id, product_id, cart_id, order_id, quantity, price
            FROM storefront.line_item
            WHERE order_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}

/// Whether any existing order already holds this confirmation token.
///
/// The generator does not guarantee uniqueness; the orchestrator calls this
/// per candidate inside the checkout transaction and regenerates on a hit.
/// A unique index on the column is the backstop for races between
/// transactions.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn token_exists(
    conn: &mut PgConnection,
    token: &ConfirmationToken,
) -> Result<bool, RepositoryError> {
    let (exists,): (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM storefront."order" WHERE confirmation_token = $1
        )
        "#,
    )
    .bind(token)
    .fetch_one(conn)
    .await?;

    Ok(exists)
}

/// Insert the order row inside the checkout transaction.
///
/// # Errors
///
/// Returns `RepositoryError::Conflict` if the confirmation token collides
/// with a concurrently committed order, `RepositoryError::Database` for
/// other database errors.
pub async fn insert(conn: &mut PgConnection, new: &NewOrder) -> Result<Order, RepositoryError> {
    let order = sqlx::query_as::<_, Order>(&format!(
        r#"
        INSERT INTO storefront."order"
            (user_id, guest_email, store_id, shipping_address_id, billing_address_id,
             confirmation_token, payment_reference, total_cost)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {ORDER_COLUMNS}
        "#
    ))
    .bind(new.user_id)
    .bind(new.guest_email.as_ref())
    .bind(new.store_id)
    .bind(new.shipping_address_id)
    .bind(new.billing_address_id)
    .bind(&new.confirmation_token)
    .bind(&new.payment_reference)
    .bind(new.total_cost)
    .fetch_one(conn)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return RepositoryError::Conflict("confirmation token already exists".to_owned());
        }
        RepositoryError::Database(e)
    })?;

    Ok(order)
}

/// Re-parent a cart's line items onto the new order.
///
/// Only items still owned by the cart are claimed (`order_id IS NULL`), so
/// two concurrent checkouts of the same cart convert at most one order's
/// worth of items: the loser observes zero claimed rows and rolls back.
/// Returns the number of items claimed.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the update fails.
pub async fn claim_cart_line_items(
    conn: &mut PgConnection,
    cart_id: CartId,
    order_id: OrderId,
) -> Result<u64, RepositoryError> {
    let result = sqlx::query(
        r"
        UPDATE storefront.line_item
        SET order_id = $1, cart_id = NULL
        WHERE cart_id = $2 AND order_id IS NULL
        ",
    )
    .bind(order_id)
    .bind(cart_id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}
