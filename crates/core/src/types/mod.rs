//! Core types for Plaza.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod notification;
pub mod price;
pub mod status;
pub mod token;

pub use email::{Email, EmailError};
pub use id::*;
pub use notification::NotificationJob;
pub use price::Price;
pub use status::*;
pub use token::{ConfirmationToken, ConfirmationTokenError};
