//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

/// Resolve a database URL, falling back to generic `DATABASE_URL`.
pub(crate) fn database_url(primary_key: &'static str) -> Result<String, MissingEnvVar> {
    std::env::var(primary_key)
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MissingEnvVar(primary_key))
}

/// A required environment variable was not set.
#[derive(Debug, thiserror::Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVar(pub &'static str);
