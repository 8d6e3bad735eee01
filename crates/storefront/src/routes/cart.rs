//! Cart route handlers.
//!
//! The active cart ID lives in the session; the first add creates the cart.
//! Responses are JSON views, page rendering is a separate front-end concern.

use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use plaza_core::{ProductId, StoreId, UserId};

use crate::db::{CartRepository, ProductRepository};
use crate::error::{AppError, Result};
use crate::middleware::OptionalAuth;
use crate::middleware::auth::{current_cart_id, set_cart_id};
use crate::models::LineItem;
use crate::state::AppState;

/// One cart line in the JSON view.
#[derive(Debug, Serialize)]
pub struct CartItemView {
    pub id: i32,
    pub product_id: ProductId,
    pub quantity: i32,
    pub price: String,
    pub line_price: String,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.as_i32(),
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.price.to_string(),
            line_price: item.extended_price().to_string(),
        }
    }
}

/// Cart contents in the JSON view.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub store_id: Option<StoreId>,
    pub items: Vec<CartItemView>,
    pub subtotal: String,
}

/// Form body for `POST /cart/items`.
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    pub product_id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

const fn default_quantity() -> i32 {
    1
}

/// Show the session's cart.
pub async fn show(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let carts = CartRepository::new(state.pool());

    let Some(cart_id) = current_cart_id(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session: {e}")))?
    else {
        return Ok(Json(CartView {
            store_id: None,
            items: Vec::new(),
            subtotal: plaza_core::Price::ZERO.to_string(),
        }));
    };

    let cart = carts
        .get(cart_id)
        .await?
        .ok_or_else(|| AppError::NotFound("cart".to_owned()))?;
    let items = carts.line_items(cart_id).await?;
    let subtotal: plaza_core::Price = items.iter().map(LineItem::extended_price).sum();

    Ok(Json(CartView {
        store_id: cart.store_id,
        items: items.iter().map(CartItemView::from).collect(),
        subtotal: subtotal.to_string(),
    }))
}

/// Add a product to the session's cart, creating the cart if needed.
#[instrument(skip(state, session, auth))]
pub async fn add_item(
    State(state): State<AppState>,
    session: Session,
    auth: OptionalAuth,
    Json(form): Json<AddItemForm>,
) -> Result<impl IntoResponse> {
    if form.quantity < 1 {
        return Err(AppError::BadRequest("quantity must be at least 1".to_owned()));
    }

    let products = ProductRepository::new(state.pool());
    let product = products
        .get(form.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("product".to_owned()))?;

    let carts = CartRepository::new(state.pool());
    let user_id: Option<UserId> = auth.0.map(|u| u.id);

    let cart_id = match current_cart_id(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session: {e}")))?
    {
        Some(id) => id,
        None => {
            let cart = carts.create(user_id).await?;
            set_cart_id(&session, cart.id)
                .await
                .map_err(|e| AppError::Internal(format!("session: {e}")))?;
            cart.id
        }
    };

    let item = carts.add_product(cart_id, &product, form.quantity).await?;

    Ok(Json(CartItemView::from(&item)))
}
