//! Checkout orchestration.
//!
//! Converts a cart into an order in one transaction: address rows, the
//! order row, and line-item re-parenting commit together or not at all.
//! The confirmation notification is enqueued after commit and is
//! best-effort.

use serde::Deserialize;
use sqlx::PgPool;
use thiserror::Error;
use tracing::instrument;

use plaza_core::{CartId, Email, EmailError, StoreId, UserId};

use crate::db::{self, CartRepository, RepositoryError};
use crate::models::{AddressTag, CurrentUser, LineItem, Order};
use crate::services::addresses::{IncompleteAddress, RawAddress};
use crate::services::confirmation;
use crate::services::notifications::NotificationQueue;

/// Checkout form as submitted by the shopper.
///
/// Address blocks are optional as a whole; see
/// [`RawAddress::resolve`](crate::services::addresses::RawAddress::resolve)
/// for the all-or-nothing rule per block.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    /// Guest email. Ignored when a signed-in user checks out.
    pub user_email: Option<String>,
    /// Opaque payment reference. No gateway interaction happens here.
    pub card_number: Option<String>,
    /// Store the order is placed against.
    pub store_id: StoreId,

    pub shipping_street: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_region: Option<String>,
    pub shipping_postal_code: Option<String>,

    pub billing_street: Option<String>,
    pub billing_city: Option<String>,
    pub billing_region: Option<String>,
    pub billing_postal_code: Option<String>,
}

impl CheckoutForm {
    fn shipping(&self) -> RawAddress {
        RawAddress {
            street: self.shipping_street.clone(),
            city: self.shipping_city.clone(),
            region: self.shipping_region.clone(),
            postal_code: self.shipping_postal_code.clone(),
        }
    }

    fn billing(&self) -> RawAddress {
        RawAddress {
            street: self.billing_street.clone(),
            city: self.billing_city.clone(),
            region: self.billing_region.clone(),
            postal_code: self.billing_postal_code.clone(),
        }
    }
}

/// Errors that can occur during checkout.
///
/// Validation variants mean no state was mutated; the caller re-renders
/// the form with the cart intact.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// No signed-in user and no guest email submitted.
    #[error("an email address is required to place an order")]
    MissingIdentity,

    /// The guest email did not parse.
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    /// No payment reference submitted.
    #[error("a payment reference is required to place an order")]
    MissingPayment,

    /// The cart has no line items left to convert.
    #[error("cart is empty")]
    EmptyCart,

    /// The cart's contents changed between pricing and conversion.
    #[error("cart contents changed during checkout")]
    CartChanged,

    /// The submitted store does not match the store the cart buys from.
    #[error("order store does not match the cart's store")]
    StoreMismatch,

    /// An address block was partially filled.
    #[error(transparent)]
    IncompleteAddress(#[from] IncompleteAddress),

    /// Token generation collided on every attempt.
    #[error("could not generate a unique confirmation token")]
    TokenExhaustion,

    /// Underlying repository failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Orchestrates cart-to-order conversion.
#[derive(Clone)]
pub struct CheckoutService {
    pool: PgPool,
    queue: NotificationQueue,
}

impl CheckoutService {
    /// Create a checkout service.
    #[must_use]
    pub const fn new(pool: PgPool, queue: NotificationQueue) -> Self {
        Self { pool, queue }
    }

    /// Convert the cart into an order.
    ///
    /// Validation runs in a fixed order and the first failure wins:
    /// identity, then payment, then non-empty cart, then store match. On
    /// success the order
    /// row, any address rows, and the line-item re-parenting commit in a
    /// single transaction, after which an `order_placed` notification is
    /// enqueued best-effort.
    ///
    /// # Errors
    ///
    /// Returns a validation variant of [`CheckoutError`] with no state
    /// mutated, `TokenExhaustion` if every token candidate collided, or
    /// `Repository` on database failure.
    #[instrument(skip(self, form, current_user), fields(cart_id = %cart_id))]
    pub async fn place_order(
        &self,
        current_user: Option<&CurrentUser>,
        cart_id: CartId,
        form: &CheckoutForm,
    ) -> Result<Order, CheckoutError> {
        let (user_id, email) = resolve_identity(current_user, form)?;

        let payment_reference = form
            .card_number
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(CheckoutError::MissingPayment)?
            .to_owned();

        let carts = CartRepository::new(&self.pool);
        let items = carts.line_items(cart_id).await?;
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let cart = carts.get(cart_id).await?.ok_or(CheckoutError::EmptyCart)?;
        if cart.store_id.is_some_and(|s| s != form.store_id) {
            return Err(CheckoutError::StoreMismatch);
        }
        let total_cost = items.iter().map(LineItem::extended_price).sum();

        let shipping = form.shipping().resolve(AddressTag::Shipping)?;
        let billing = form.billing().resolve(AddressTag::Billing)?;

        let mut tx = self.pool.begin().await.map_err(RepositoryError::from)?;

        let shipping_address_id = match &shipping {
            Some(fields) => {
                Some(db::addresses::insert(&mut *tx, fields, AddressTag::Shipping, user_id).await?)
            }
            None => None,
        };
        let billing_address_id = match &billing {
            Some(fields) => {
                Some(db::addresses::insert(&mut *tx, fields, AddressTag::Billing, user_id).await?)
            }
            None => None,
        };

        let mut confirmation_token = None;
        for _ in 0..confirmation::MAX_ATTEMPTS {
            let candidate = confirmation::generate();
            if !db::orders::token_exists(&mut *tx, &candidate).await? {
                confirmation_token = Some(candidate);
                break;
            }
        }
        let Some(confirmation_token) = confirmation_token else {
            return Err(CheckoutError::TokenExhaustion);
        };

        let new_order = db::orders::NewOrder {
            user_id,
            guest_email: if user_id.is_none() {
                Some(email.clone())
            } else {
                None
            },
            store_id: form.store_id,
            shipping_address_id,
            billing_address_id,
            confirmation_token,
            payment_reference,
            total_cost,
        };
        let order = db::orders::insert(&mut *tx, &new_order).await?;

        let claimed = db::orders::claim_cart_line_items(&mut *tx, cart_id, order.id).await?;
        if let Err(e) = verify_claimed(claimed, items.len()) {
            tx.rollback().await.map_err(RepositoryError::from)?;
            return Err(e);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        let job = plaza_core::NotificationJob::OrderPlaced {
            email: email.to_string(),
            confirmation_token: order.confirmation_token.clone(),
            order_id: order.id,
        };
        if let Err(e) = self.queue.enqueue(&job).await {
            tracing::error!(order_id = %order.id, error = %e, "failed to enqueue order confirmation");
        }

        Ok(order)
    }
}

/// Resolve who is buying.
///
/// A signed-in user wins outright and their account email is used for the
/// confirmation. Otherwise the form must carry a parseable guest email; no
/// account is created from it.
fn resolve_identity(
    current_user: Option<&CurrentUser>,
    form: &CheckoutForm,
) -> Result<(Option<UserId>, Email), CheckoutError> {
    if let Some(user) = current_user {
        return Ok((Some(user.id), user.email.clone()));
    }

    let raw = form
        .user_email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or(CheckoutError::MissingIdentity)?;

    let email = Email::parse(raw)?;
    Ok((None, email))
}

/// Check that the claim converted exactly the line items the total was
/// priced from.
///
/// The total is summed from items read before the transaction opens, but
/// the claim takes whatever rows the cart holds at claim time. Zero rows
/// means a concurrent checkout already emptied the cart; any other
/// mismatch means the cart gained or lost items in between, and the order
/// must not commit with a stale total.
fn verify_claimed(claimed: u64, expected: usize) -> Result<(), CheckoutError> {
    if claimed == 0 {
        return Err(CheckoutError::EmptyCart);
    }
    if claimed != expected as u64 {
        return Err(CheckoutError::CartChanged);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest_form(email: Option<&str>, card: Option<&str>) -> CheckoutForm {
        CheckoutForm {
            user_email: email.map(ToOwned::to_owned),
            card_number: card.map(ToOwned::to_owned),
            store_id: StoreId::new(1),
            shipping_street: None,
            shipping_city: None,
            shipping_region: None,
            shipping_postal_code: None,
            billing_street: None,
            billing_city: None,
            billing_region: None,
            billing_postal_code: None,
        }
    }

    fn shopper() -> CurrentUser {
        CurrentUser {
            id: UserId::new(7),
            email: Email::parse("shopper@example.com").unwrap(),
        }
    }

    #[test]
    fn signed_in_user_wins_over_form_email() {
        let user = shopper();
        let form = guest_form(Some("other@example.com"), None);
        let (user_id, email) = resolve_identity(Some(&user), &form).unwrap();
        assert_eq!(user_id, Some(UserId::new(7)));
        assert_eq!(email.as_ref(), "shopper@example.com");
    }

    #[test]
    fn guest_email_is_trimmed_and_parsed() {
        let form = guest_form(Some("  guest@example.com  "), None);
        let (user_id, email) = resolve_identity(None, &form).unwrap();
        assert_eq!(user_id, None);
        assert_eq!(email.as_ref(), "guest@example.com");
    }

    #[test]
    fn missing_email_without_session_fails() {
        let form = guest_form(None, None);
        assert!(matches!(
            resolve_identity(None, &form),
            Err(CheckoutError::MissingIdentity)
        ));

        let blank = guest_form(Some("   "), None);
        assert!(matches!(
            resolve_identity(None, &blank),
            Err(CheckoutError::MissingIdentity)
        ));
    }

    #[test]
    fn malformed_guest_email_fails() {
        let form = guest_form(Some("not-an-email"), None);
        assert!(matches!(
            resolve_identity(None, &form),
            Err(CheckoutError::InvalidEmail(_))
        ));
    }

    #[test]
    fn claiming_every_priced_item_passes() {
        assert!(verify_claimed(3, 3).is_ok());
    }

    #[test]
    fn claiming_nothing_means_cart_already_converted() {
        assert!(matches!(verify_claimed(0, 3), Err(CheckoutError::EmptyCart)));
    }

    #[test]
    fn claim_count_mismatch_aborts_checkout() {
        // An item added after pricing would join the order without joining
        // the total; a removed item leaves the total too high.
        assert!(matches!(
            verify_claimed(4, 3),
            Err(CheckoutError::CartChanged)
        ));
        assert!(matches!(
            verify_claimed(2, 3),
            Err(CheckoutError::CartChanged)
        ));
    }
}
