//! Session data for the admin panel.

use serde::{Deserialize, Serialize};

use plaza_core::{AdminUserId, Email, UserRole};

/// The signed-in administrator, as stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub id: AdminUserId,
    pub email: Email,
    pub name: String,
    pub role: UserRole,
}

/// Session storage keys.
pub mod keys {
    /// Key for the signed-in administrator.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
