//! Confirmation token generation.
//!
//! Tokens are the only credential a guest holds for their order, so they
//! must be unguessable. Each candidate hashes 16 random bytes together with
//! the current timestamp; uniqueness is checked against the database by the
//! checkout orchestrator, not here.

use chrono::Utc;
use rand::RngCore;
use sha2::{Digest, Sha256};

use plaza_core::ConfirmationToken;

/// How many candidate tokens checkout will try before giving up.
pub const MAX_ATTEMPTS: usize = 5;

/// Generate a fresh candidate token.
#[must_use]
pub fn generate() -> ConfirmationToken {
    let mut salt = [0u8; 16];
    rand::rng().fill_bytes(&mut salt);

    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(nanos.to_be_bytes());

    ConfirmationToken::new_unchecked(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_token_is_well_formed() {
        let token = generate();
        assert_eq!(token.as_str().len(), ConfirmationToken::LENGTH);
        assert!(ConfirmationToken::parse(token.as_str()).is_ok());
    }

    #[test]
    fn consecutive_tokens_differ() {
        assert_ne!(generate(), generate());
    }
}
