//! Demo data seeding.
//!
//! Creates one live store with a handful of products so a fresh install
//! has something to add to a cart. Safe to re-run: seeding is skipped when
//! any store already exists.

use rust_decimal::Decimal;
use sqlx::PgPool;
use thiserror::Error;

use super::{MissingEnvVar, database_url};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVar),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

const DEMO_PRODUCTS: &[(&str, &str)] = &[
    ("Canvas Tote", "24.00"),
    ("Enamel Mug", "14.50"),
    ("Field Notebook", "9.00"),
];

/// Seed the database with a demo store and products.
///
/// # Errors
///
/// Returns `SeedError` if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let url = database_url("STOREFRONT_DATABASE_URL")?;
    let pool = PgPool::connect(&url).await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM storefront.store")
        .fetch_one(&pool)
        .await?;
    if existing > 0 {
        tracing::info!("Stores already present, skipping seed");
        return Ok(());
    }

    let (store_id,): (i32,) = sqlx::query_as(
        r"
        INSERT INTO storefront.store (name, status)
        VALUES ('Demo Store', 'live')
        RETURNING id
        ",
    )
    .fetch_one(&pool)
    .await?;

    for (name, price) in DEMO_PRODUCTS {
        let price: Decimal = price.parse().unwrap_or_default();
        sqlx::query(
            r"
            INSERT INTO storefront.product (store_id, name, price)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(store_id)
        .bind(name)
        .bind(price)
        .execute(&pool)
        .await?;
    }

    tracing::info!(
        "Seeded store {} with {} products",
        store_id,
        DEMO_PRODUCTS.len()
    );
    Ok(())
}
