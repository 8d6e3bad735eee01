//! Order administration handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use plaza_core::{OrderId, OrderStatus, StoreId};

use crate::db::{OrderRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Query parameters for the order list.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub store_id: Option<StoreId>,
}

/// Body for `PUT /orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// Body for `PUT /orders/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    pub store_id: StoreId,
}

/// List orders, optionally filtered by store.
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse> {
    let orders = OrderRepository::new(state.pool());

    let orders = match params.store_id {
        Some(store_id) => orders.list_for_store(store_id).await?,
        None => orders.list().await?,
    };

    Ok(Json(orders))
}

/// Order detail.
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<OrderId>,
) -> Result<impl IntoResponse> {
    let order = OrderRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("order".to_owned()))?;

    Ok(Json(order))
}

/// Reassign an order to another store.
///
/// The only non-status field administrators may edit. Line items and the
/// fixed total travel with the order; no notification is enqueued.
#[instrument(skip(state, admin, body))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    Path(id): Path<OrderId>,
    Json(body): Json<UpdateBody>,
) -> Result<impl IntoResponse> {
    let order = OrderRepository::new(state.pool())
        .reassign_store(id, body.store_id)
        .await
        .map_err(reassign_error)?;

    tracing::info!(admin = %admin.email, order_id = %order.id, store_id = %order.store_id, "order reassigned");
    Ok(Json(order))
}

fn reassign_error(e: RepositoryError) -> AppError {
    match e {
        RepositoryError::NotFound => AppError::NotFound("order".to_owned()),
        RepositoryError::Conflict(msg) => AppError::BadRequest(msg),
        other => AppError::Database(other),
    }
}

/// Set an order's status. Never enqueues a notification.
#[instrument(skip(state, admin, body))]
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    Path(id): Path<OrderId>,
    Json(body): Json<StatusBody>,
) -> Result<impl IntoResponse> {
    let status = OrderStatus::parse(&body.status)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let order = state.status().change_order_status(id, &status).await?;

    tracing::info!(admin = %admin.email, order_id = %order.id, "order status changed");
    Ok(Json(order))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_update_body_takes_store_id() {
        let body: UpdateBody = serde_json::from_str(r#"{"store_id": 4}"#).unwrap();
        assert_eq!(body.store_id, StoreId::new(4));
    }

    #[test]
    fn test_reassign_error_mapping() {
        assert!(matches!(
            reassign_error(RepositoryError::NotFound),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            reassign_error(RepositoryError::Conflict("store 4 does not exist".to_owned())),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            reassign_error(RepositoryError::DataCorruption("bad row".to_owned())),
            AppError::Database(_)
        ));
    }
}
