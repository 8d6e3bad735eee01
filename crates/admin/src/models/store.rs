//! Store model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use plaza_core::{StoreId, StoreStatus};

/// A store as the admin panel sees it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub status: StoreStatus,
    pub created_at: DateTime<Utc>,
}
