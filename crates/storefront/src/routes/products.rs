//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use plaza_core::{ProductId, StoreId};

use crate::db::ProductRepository;
use crate::error::Result;
use crate::models::Product;
use crate::state::AppState;

/// Product in the JSON view.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
        }
    }
}

/// List a store's products.
pub async fn index(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<impl IntoResponse> {
    let products = ProductRepository::new(state.pool());
    let products = products.list_for_store(store_id).await?;

    Ok(Json(
        products.iter().map(ProductView::from).collect::<Vec<_>>(),
    ))
}
