//! Middleware for the admin server.

pub mod auth;
pub mod session;

pub use auth::{RequireAdminAuth, RequirePlatformAdmin};
pub use session::create_session_layer;
