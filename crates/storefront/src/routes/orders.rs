//! Order route handlers.
//!
//! Checkout converts the session's cart into an order and redirects to the
//! confirmation view, which is addressable solely by confirmation token so
//! guests can reach it without an account.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use plaza_core::{ConfirmationToken, OrderId, StoreId};

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::auth::{clear_cart_id, current_cart_id};
use crate::middleware::{OptionalAuth, RequireAuth};
use crate::models::Order;
use crate::routes::cart::CartItemView;
use crate::services::CheckoutForm;
use crate::state::AppState;

/// Order summary in the JSON view.
#[derive(Debug, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub store_id: StoreId,
    pub status: String,
    pub confirmation_token: String,
    pub total_cost: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            store_id: order.store_id,
            status: order.status.to_string(),
            confirmation_token: order.confirmation_token.to_string(),
            total_cost: order.total_cost.to_string(),
            created_at: order.created_at,
        }
    }
}

/// Confirmation view: the order plus its line items.
#[derive(Debug, Serialize)]
pub struct ConfirmationView {
    #[serde(flatten)]
    pub order: OrderView,
    pub items: Vec<CartItemView>,
}

/// Checkout: convert the session's cart into an order.
///
/// On success the cart is forgotten from the session and the caller is
/// redirected to the confirmation view.
#[instrument(skip(state, session, auth, form))]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    auth: OptionalAuth,
    Json(form): Json<CheckoutForm>,
) -> Result<impl IntoResponse> {
    let cart_id = current_cart_id(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session: {e}")))?
        .ok_or(AppError::Checkout(crate::services::CheckoutError::EmptyCart))?;

    let order = state
        .checkout()
        .place_order(auth.0.as_ref(), cart_id, &form)
        .await?;

    if let Err(e) = clear_cart_id(&session).await {
        // The cart is already consumed; a stale session key is harmless.
        tracing::warn!(error = %e, "failed to clear cart from session");
    }

    Ok(Redirect::to(&format!(
        "/orders/confirmation/{}",
        order.confirmation_token
    )))
}

/// Confirmation view, looked up by token alone.
pub async fn confirmation(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse> {
    let token = ConfirmationToken::parse(&token)
        .map_err(|_| AppError::NotFound("order".to_owned()))?;

    let orders = OrderRepository::new(state.pool());
    let order = orders
        .find_by_confirmation_token(&token)
        .await?
        .ok_or_else(|| AppError::NotFound("order".to_owned()))?;

    let items = orders.line_items(order.id).await?;

    Ok(Json(ConfirmationView {
        order: OrderView::from(&order),
        items: items.iter().map(CartItemView::from).collect(),
    }))
}

/// Order history for the signed-in shopper, newest first.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse> {
    let orders = OrderRepository::new(state.pool());
    let orders = orders.list_for_user(user.id).await?;

    Ok(Json(
        orders.iter().map(OrderView::from).collect::<Vec<_>>(),
    ))
}
