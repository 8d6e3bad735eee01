//! Session-related types.
//!
//! Types stored in the session for authentication and cart state. The
//! authentication mechanics themselves (login, signup) are an external
//! collaborator; this crate only consumes the identity the session holds.

use serde::{Deserialize, Serialize};

use plaza_core::{Email, UserId};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in shopper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
}

/// Session keys for shopper state.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing the active cart ID.
    pub const CART_ID: &str = "cart_id";
}
