//! Administrator account management commands.

use sqlx::PgPool;
use thiserror::Error;

use plaza_admin::db::{AdminUserRepository, RepositoryError};
use plaza_core::{Email, UserRole};

use super::{MissingEnvVar, database_url};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVar),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: admin, stocker, platform_admin")]
    InvalidRole(String),

    /// A pending role cannot be granted directly.
    #[error("Cannot create an account with pending role: {0}")]
    PendingRole(String),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

/// Create a new administrator account.
///
/// # Errors
///
/// Returns `AdminError` if the role or email is invalid, the email is
/// taken, or the database is unreachable.
pub async fn create_user(email: &str, name: &str, role: &str) -> Result<i32, AdminError> {
    dotenvy::dotenv().ok();

    let parsed_role: UserRole = role
        .parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))?;
    if parsed_role.is_pending() {
        return Err(AdminError::PendingRole(role.to_owned()));
    }

    let email = Email::parse(email).map_err(|e| AdminError::InvalidEmail(e.to_string()))?;

    let url = database_url("ADMIN_DATABASE_URL")?;

    tracing::info!("Connecting to admin database...");
    let pool = PgPool::connect(&url).await?;

    tracing::info!("Creating administrator: {} ({})", email, parsed_role);
    let user = AdminUserRepository::new(&pool)
        .create(&email, name, parsed_role)
        .await?;

    tracing::info!(
        "Administrator created! ID: {}, Email: {}, Role: {}",
        user.id,
        user.email,
        user.role
    );

    Ok(user.id.as_i32())
}
