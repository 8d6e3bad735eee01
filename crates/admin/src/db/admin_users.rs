//! Admin user repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use plaza_core::{AdminUserId, Email, UserRole};

use super::RepositoryError;

/// An administrator account row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: Email,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Repository for administrator accounts.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look an administrator up by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_email(&self, email: &Email) -> Result<Option<AdminUser>, RepositoryError> {
        let user = sqlx::query_as::<_, AdminUser>(
            r"
            SELECT id, email, name, role, created_at
            FROM admin.admin_user
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Create an administrator account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already taken,
    /// `RepositoryError::Database` on other failures.
    pub async fn create(
        &self,
        email: &Email,
        name: &str,
        role: UserRole,
    ) -> Result<AdminUser, RepositoryError> {
        let user = sqlx::query_as::<_, AdminUser>(
            r"
            INSERT INTO admin.admin_user (email, name, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, name, role, created_at
            ",
        )
        .bind(email)
        .bind(name)
        .bind(role)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(format!("admin user {email} already exists"));
            }
            RepositoryError::Database(e)
        })?;

        Ok(user)
    }
}
