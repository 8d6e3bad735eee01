//! Order confirmation token type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ConfirmationToken`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ConfirmationTokenError {
    /// The token is not exactly [`ConfirmationToken::LENGTH`] characters.
    #[error("confirmation token must be exactly {expected} characters")]
    WrongLength {
        /// Expected length.
        expected: usize,
    },
    /// The token contains characters outside lowercase hex.
    #[error("confirmation token must be lowercase hexadecimal")]
    InvalidCharacters,
}

/// Unique, hard-to-guess lookup key for an order.
///
/// A confirmation token is the sole key for guest order-status pages: anyone
/// holding the token may view the order, no authentication required. Tokens
/// are 64-character lowercase hex strings (a SHA-256 digest over a random
/// salt and the creation timestamp, produced by the storefront's generator).
///
/// The generator does not guarantee uniqueness; the checkout orchestrator
/// checks candidates against existing orders and regenerates on collision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmationToken(String);

impl ConfirmationToken {
    /// Token length in characters (hex-encoded SHA-256 digest).
    pub const LENGTH: usize = 64;

    /// Parse a token from an untrusted source (e.g., a URL path parameter).
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly [`Self::LENGTH`]
    /// lowercase hex characters.
    pub fn parse(s: &str) -> Result<Self, ConfirmationTokenError> {
        if s.len() != Self::LENGTH {
            return Err(ConfirmationTokenError::WrongLength {
                expected: Self::LENGTH,
            });
        }
        if !s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)) {
            return Err(ConfirmationTokenError::InvalidCharacters);
        }
        Ok(Self(s.to_owned()))
    }

    /// Wrap a string known to be a valid token.
    ///
    /// For use by the token generator and database decoding, where the value
    /// is produced in the correct format by construction.
    #[must_use]
    pub const fn new_unchecked(s: String) -> Self {
        Self(s)
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfirmationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ConfirmationToken {
    type Err = ConfirmationTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for ConfirmationToken {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ConfirmationToken {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for ConfirmationToken {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_token() -> String {
        "ab".repeat(32)
    }

    #[test]
    fn test_parse_valid() {
        let token = ConfirmationToken::parse(&valid_token()).unwrap();
        assert_eq!(token.as_str().len(), ConfirmationToken::LENGTH);
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(matches!(
            ConfirmationToken::parse("abc123"),
            Err(ConfirmationTokenError::WrongLength { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_uppercase() {
        let upper = valid_token().to_uppercase();
        assert!(matches!(
            ConfirmationToken::parse(&upper),
            Err(ConfirmationTokenError::InvalidCharacters)
        ));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let bad = "zz".repeat(32);
        assert!(matches!(
            ConfirmationToken::parse(&bad),
            Err(ConfirmationTokenError::InvalidCharacters)
        ));
    }

    #[test]
    fn test_display_matches_inner() {
        let token = ConfirmationToken::parse(&valid_token()).unwrap();
        assert_eq!(token.to_string(), valid_token());
    }
}
