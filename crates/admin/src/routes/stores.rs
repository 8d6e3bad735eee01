//! Store administration handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use plaza_core::{StoreId, StoreStatus};

use crate::db::StoreRepository;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequirePlatformAdmin};
use crate::state::AppState;

/// Query parameters for the store list.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

/// Body for `PUT /stores/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// List stores, optionally filtered by status.
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse> {
    let stores = StoreRepository::new(state.pool());

    let stores = match params.status.as_deref() {
        Some(raw) => {
            let status: StoreStatus = raw
                .parse()
                .map_err(|_| AppError::BadRequest(format!("unknown store status: {raw}")))?;
            stores.list_by_status(status).await?
        }
        None => stores.list().await?,
    };

    Ok(Json(stores))
}

/// Store detail.
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<StoreId>,
) -> Result<impl IntoResponse> {
    let store = StoreRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("store".to_owned()))?;

    Ok(Json(store))
}

/// Transition a store's lifecycle status.
///
/// Platform administrators only. Going live or declining notifies the
/// store owner; disabling is silent; repeating the current status is a
/// no-op.
#[instrument(skip(state, admin, body))]
pub async fn update_status(
    State(state): State<AppState>,
    RequirePlatformAdmin(admin): RequirePlatformAdmin,
    Path(id): Path<StoreId>,
    Json(body): Json<StatusBody>,
) -> Result<impl IntoResponse> {
    let status: StoreStatus = body
        .status
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown store status: {}", body.status)))?;

    let store = state.status().change_store_status(id, status).await?;

    tracing::info!(admin = %admin.email, store_id = %store.id, "store status changed");
    Ok(Json(store))
}
