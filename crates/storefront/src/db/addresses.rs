//! Customer address repository.

use sqlx::{PgConnection, PgPool};

use plaza_core::{AddressId, UserId};

use super::RepositoryError;
use crate::models::{AddressTag, CustomerAddress};
use crate::services::addresses::AddressFields;

/// Repository for customer address operations.
///
/// Every checkout that submits address fields creates fresh rows; there is
/// deliberately no deduplication against existing addresses. Rows are never
/// updated once created.
pub struct AddressRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an address by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: AddressId) -> Result<Option<CustomerAddress>, RepositoryError> {
        let address = sqlx::query_as::<_, CustomerAddress>(
            r"
            SELECT id, user_id, tag, street, city, region, postal_code, created_at
            FROM storefront.customer_address
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(address)
    }
}

/// Insert a fresh address row inside the checkout transaction.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert(
    conn: &mut PgConnection,
    fields: &AddressFields,
    tag: AddressTag,
    user_id: Option<UserId>,
) -> Result<AddressId, RepositoryError> {
    let (id,): (i32,) = sqlx::query_as(
        r"
        INSERT INTO storefront.customer_address (user_id, tag, street, city, region, postal_code)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        ",
    )
    .bind(user_id)
    .bind(tag)
    .bind(&fields.street)
    .bind(&fields.city)
    .bind(&fields.region)
    .bind(&fields.postal_code)
    .fetch_one(conn)
    .await?;

    Ok(AddressId::new(id))
}
