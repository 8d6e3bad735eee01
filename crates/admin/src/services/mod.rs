//! Business logic for the admin panel.

pub mod notifications;
pub mod status;

pub use notifications::NotificationQueue;
pub use status::{StatusError, StatusService};
