//! Order repository for the admin panel.

use sqlx::PgPool;

use plaza_core::{OrderId, OrderStatus, StoreId};

use super::RepositoryError;
use crate::models::Order;

const ORDER_COLUMNS: &str =
    "id, user_id, guest_email, store_id, status, total_cost, created_at";

/// Repository for order administration.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM storefront."order"
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// List all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM storefront."order"
            ORDER BY created_at DESC
            "#
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// List a store's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_store(&self, store_id: StoreId) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM storefront."order"
            WHERE store_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(store_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Reassign an order to another store, returning the updated row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order does not exist,
    /// `RepositoryError::Conflict` if the target store does not exist,
    /// `RepositoryError::Database` on other failures.
    pub async fn reassign_store(
        &self,
        id: OrderId,
        store_id: StoreId,
    ) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE storefront."order"
            SET store_id = $1
            WHERE id = $2
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(store_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::Conflict(format!("store {store_id} does not exist"));
            }
            RepositoryError::Database(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        Ok(order)
    }

    /// Set an order's status, returning the updated row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order does not exist,
    /// `RepositoryError::Database` on query failure.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: &OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE storefront."order"
            SET status = $1
            WHERE id = $2
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(status)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(order)
    }
}
