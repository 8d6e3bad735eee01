//! Customer address domain types.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use plaza_core::{AddressId, UserId};

/// Whether an address is the order's shipping or billing address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressTag {
    Shipping,
    Billing,
}

impl fmt::Display for AddressTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shipping => write!(f, "shipping"),
            Self::Billing => write!(f, "billing"),
        }
    }
}

impl std::str::FromStr for AddressTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shipping" => Ok(Self::Shipping),
            "billing" => Ok(Self::Billing),
            _ => Err(format!("invalid address tag: {s}")),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for AddressTag {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for AddressTag {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        s.parse::<Self>().map_err(Into::into)
    }
}

impl sqlx::Encode<'_, sqlx::Postgres> for AddressTag {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.to_string(), buf)
    }
}

/// An immutable shipping or billing address snapshot.
///
/// Created fresh for every checkout that submits address fields (no
/// deduplication against existing rows) and never mutated once attached to
/// an order. Held by a registered user or anonymously per-order.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerAddress {
    /// Unique address ID.
    pub id: AddressId,
    /// Owning user, when the purchaser was signed in.
    pub user_id: Option<UserId>,
    /// Shipping or billing.
    pub tag: AddressTag,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// State or region.
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// When the address was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for tag in [AddressTag::Shipping, AddressTag::Billing] {
            assert_eq!(tag.to_string().parse::<AddressTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_tag_rejects_unknown() {
        assert!("mailing".parse::<AddressTag>().is_err());
    }
}
