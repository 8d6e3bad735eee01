//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Liveness check
//! GET  /health/ready             - Readiness check (pings the database)
//!
//! # Orders (any confirmed admin)
//! GET  /orders                   - List orders (optionally ?store_id=)
//! GET  /orders/{id}              - Order detail
//! PUT  /orders/{id}              - Reassign an order to another store
//! PUT  /orders/{id}/status       - Set an order's status (never notifies)
//!
//! # Stores (platform admin only for writes)
//! GET  /stores                   - List stores (optionally ?status=)
//! GET  /stores/{id}              - Store detail
//! PUT  /stores/{id}/status       - Transition a store (live/declined notify)
//! ```

pub mod orders;
pub mod stores;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, put},
};

use crate::state::AppState;

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show).put(orders::update))
        .route("/{id}/status", put(orders::update_status))
}

/// Create the store routes router.
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(stores::index))
        .route("/{id}", get(stores::show))
        .route("/{id}/status", put(stores::update_status))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(ready))
        .nest("/orders", order_routes())
        .nest("/stores", store_routes())
}

/// Liveness check.
async fn health() -> &'static str {
    "ok"
}

/// Readiness check: verifies the database is reachable.
async fn ready(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
