//! Status and role enums for stores, orders, and users.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Platform-administrator-controlled lifecycle of a storefront.
///
/// A store starts `pending` and is taken `live`, `declined`, or `disabled`
/// by a platform administrator. `live` and `declined` transitions enqueue a
/// notification to the store; `disabled` is silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    /// Awaiting platform-administrator review.
    #[default]
    Pending,
    /// Publicly visible and accepting orders.
    Live,
    /// Rejected by a platform administrator.
    Declined,
    /// Taken offline after having been live.
    Disabled,
}

impl StoreStatus {
    /// Whether shoppers can see and buy from the store.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Live => write!(f, "live"),
            Self::Declined => write!(f, "declined"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

impl std::str::FromStr for StoreStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "live" => Ok(Self::Live),
            "declined" => Ok(Self::Declined),
            "disabled" => Ok(Self::Disabled),
            _ => Err(format!("invalid store status: {s}")),
        }
    }
}

/// Errors that can occur when parsing an [`OrderStatus`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum OrderStatusError {
    /// The label is empty or whitespace-only.
    #[error("order status cannot be empty")]
    Empty,
    /// The label is too long.
    #[error("order status must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// Administrator-controlled lifecycle label of a placed order.
///
/// Unlike [`StoreStatus`] the set of order statuses is open-ended:
/// administrators assign free-form labels, of which only `pending` (the
/// initial state) and `cancelled` carry platform meaning. The label is
/// validated for shape, not membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    /// Maximum length of a status label.
    pub const MAX_LENGTH: usize = 64;

    /// The initial status of every order created at checkout.
    #[must_use]
    pub fn pending() -> Self {
        Self("pending".to_owned())
    }

    /// The status an administrator sets to cancel an order.
    #[must_use]
    pub fn cancelled() -> Self {
        Self("cancelled".to_owned())
    }

    /// Parse a status label, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed label is empty or longer than
    /// [`Self::MAX_LENGTH`].
    pub fn parse(s: &str) -> Result<Self, OrderStatusError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(OrderStatusError::Empty);
        }
        if trimmed.len() > Self::MAX_LENGTH {
            return Err(OrderStatusError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the initial `pending` status.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.0 == "pending"
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = OrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Platform user role.
///
/// A closed enum with explicit transitions instead of the bare strings the
/// role column historically held: `pending_*` roles are placeholders created
/// when a store owner invites staff, confirmed when the invitee completes
/// signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Ordinary shopper.
    #[default]
    Shopper,
    /// Invited store administrator who has not completed signup.
    PendingAdmin,
    /// Store administrator.
    Admin,
    /// Invited stocker who has not completed signup.
    PendingStocker,
    /// Store stocker (inventory management).
    Stocker,
    /// Platform-wide administrator.
    PlatformAdmin,
}

impl UserRole {
    /// The role this user holds once their invitation is confirmed.
    ///
    /// Pending roles resolve to their confirmed counterpart; confirmed roles
    /// are unchanged.
    #[must_use]
    pub const fn confirmed(self) -> Self {
        match self {
            Self::PendingAdmin => Self::Admin,
            Self::PendingStocker => Self::Stocker,
            other => other,
        }
    }

    /// Whether this role is an unconfirmed invitation.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::PendingAdmin | Self::PendingStocker)
    }

    /// Whether this role may manage store and order lifecycles platform-wide.
    #[must_use]
    pub const fn is_platform_admin(&self) -> bool {
        matches!(self, Self::PlatformAdmin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shopper => write!(f, "shopper"),
            Self::PendingAdmin => write!(f, "pending_admin"),
            Self::Admin => write!(f, "admin"),
            Self::PendingStocker => write!(f, "pending_stocker"),
            Self::Stocker => write!(f, "stocker"),
            Self::PlatformAdmin => write!(f, "platform_admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shopper" => Ok(Self::Shopper),
            "pending_admin" => Ok(Self::PendingAdmin),
            "admin" => Ok(Self::Admin),
            "pending_stocker" => Ok(Self::PendingStocker),
            "stocker" => Ok(Self::Stocker),
            "platform_admin" => Ok(Self::PlatformAdmin),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

// SQLx support (with postgres feature): all three stored as TEXT
#[cfg(feature = "postgres")]
mod postgres {
    use super::{OrderStatus, StoreStatus, UserRole};

    macro_rules! text_backed {
        ($name:ident) => {
            impl sqlx::Type<sqlx::Postgres> for $name {
                fn type_info() -> sqlx::postgres::PgTypeInfo {
                    <String as sqlx::Type<sqlx::Postgres>>::type_info()
                }

                fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                    <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
                }
            }

            impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $name {
                fn decode(
                    value: sqlx::postgres::PgValueRef<'r>,
                ) -> Result<Self, sqlx::error::BoxDynError> {
                    let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
                    s.parse::<Self>().map_err(Into::into)
                }
            }

            impl sqlx::Encode<'_, sqlx::Postgres> for $name {
                fn encode_by_ref(
                    &self,
                    buf: &mut sqlx::postgres::PgArgumentBuffer,
                ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                    <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(
                        &self.to_string(),
                        buf,
                    )
                }
            }
        };
    }

    text_backed!(StoreStatus);
    text_backed!(OrderStatus);
    text_backed!(UserRole);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_store_status_roundtrip() {
        for status in [
            StoreStatus::Pending,
            StoreStatus::Live,
            StoreStatus::Declined,
            StoreStatus::Disabled,
        ] {
            assert_eq!(status.to_string().parse::<StoreStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_store_status_rejects_unknown() {
        assert!("launched".parse::<StoreStatus>().is_err());
    }

    #[test]
    fn test_order_status_open_ended() {
        let status = OrderStatus::parse("awaiting_pickup").unwrap();
        assert_eq!(status.as_str(), "awaiting_pickup");
        assert!(!status.is_pending());
    }

    #[test]
    fn test_order_status_trims() {
        assert_eq!(OrderStatus::parse(" cancelled ").unwrap().as_str(), "cancelled");
    }

    #[test]
    fn test_order_status_rejects_empty() {
        assert!(matches!(OrderStatus::parse("  "), Err(OrderStatusError::Empty)));
    }

    #[test]
    fn test_order_status_rejects_too_long() {
        let long = "x".repeat(65);
        assert!(matches!(
            OrderStatus::parse(&long),
            Err(OrderStatusError::TooLong { .. })
        ));
    }

    #[test]
    fn test_order_status_pending() {
        assert!(OrderStatus::pending().is_pending());
        assert!(!OrderStatus::cancelled().is_pending());
    }

    #[test]
    fn test_role_confirmation() {
        assert_eq!(UserRole::PendingAdmin.confirmed(), UserRole::Admin);
        assert_eq!(UserRole::PendingStocker.confirmed(), UserRole::Stocker);
        assert_eq!(UserRole::Shopper.confirmed(), UserRole::Shopper);
        assert_eq!(UserRole::PlatformAdmin.confirmed(), UserRole::PlatformAdmin);
    }

    #[test]
    fn test_role_predicates() {
        assert!(UserRole::PendingStocker.is_pending());
        assert!(!UserRole::Stocker.is_pending());
        assert!(UserRole::PlatformAdmin.is_platform_admin());
        assert!(!UserRole::Admin.is_platform_admin());
    }

    #[test]
    fn test_role_string_roundtrip() {
        for role in [
            UserRole::Shopper,
            UserRole::PendingAdmin,
            UserRole::Admin,
            UserRole::PendingStocker,
            UserRole::Stocker,
            UserRole::PlatformAdmin,
        ] {
            assert_eq!(role.to_string().parse::<UserRole>().unwrap(), role);
        }
    }
}
