//! Business logic for the storefront.

pub mod addresses;
pub mod checkout;
pub mod confirmation;
pub mod notifications;

pub use addresses::{AddressFields, IncompleteAddress, RawAddress};
pub use checkout::{CheckoutError, CheckoutForm, CheckoutService};
pub use notifications::NotificationQueue;
