//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Liveness check
//! GET  /health/ready                 - Readiness check (pings the database)
//!
//! # Products
//! GET  /stores/{store_id}/products   - Product listing for a store
//!
//! # Cart
//! GET  /cart                         - Current cart contents
//! POST /cart/items                   - Add a product (creates the cart on first use)
//!
//! # Orders
//! POST /orders                       - Checkout: convert the session cart to an order
//! GET  /orders                       - Order history (requires auth)
//! GET  /orders/confirmation/{token}  - Confirmation view, token is the only key
//! ```

pub mod cart;
pub mod orders;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", post(cart::add_item))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create).get(orders::index))
        .route("/confirmation/{token}", get(orders::confirmation))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(ready))
        .route("/stores/{store_id}/products", get(products::index))
        .nest("/cart", cart_routes())
        .nest("/orders", order_routes())
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
