//! Store repository for the admin panel.

use sqlx::PgPool;

use plaza_core::{StoreId, StoreStatus};

use super::RepositoryError;
use crate::models::Store;

/// Repository for store reads and status updates.
pub struct StoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StoreRepository<'a> {
    /// Create a new store repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a store by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: StoreId) -> Result<Option<Store>, RepositoryError> {
        let store = sqlx::query_as::<_, Store>(
            r"
            SELECT id, name, status, created_at
            FROM storefront.store
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(store)
    }

    /// List all stores, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Store>, RepositoryError> {
        let stores = sqlx::query_as::<_, Store>(
            r"
            SELECT id, name, status, created_at
            FROM storefront.store
            ORDER BY id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(stores)
    }

    /// List stores with the given status, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_status(
        &self,
        status: StoreStatus,
    ) -> Result<Vec<Store>, RepositoryError> {
        let stores = sqlx::query_as::<_, Store>(
            r"
            SELECT id, name, status, created_at
            FROM storefront.store
            WHERE status = $1
            ORDER BY id DESC
            ",
        )
        .bind(status)
        .fetch_all(self.pool)
        .await?;

        Ok(stores)
    }

    /// Set a store's status, returning the updated row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the store does not exist,
    /// `RepositoryError::Database` on query failure.
    pub async fn update_status(
        &self,
        id: StoreId,
        status: StoreStatus,
    ) -> Result<Store, RepositoryError> {
        let store = sqlx::query_as::<_, Store>(
            r"
            UPDATE storefront.store
            SET status = $1
            WHERE id = $2
            RETURNING id, name, status, created_at
            ",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(store)
    }
}
