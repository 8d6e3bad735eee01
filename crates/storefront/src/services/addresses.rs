//! Address field resolution for checkout submissions.
//!
//! Each address on the checkout form is all-or-nothing: a shopper either
//! fills in every field or leaves the whole block blank. A partially filled
//! block is rejected rather than silently stored with gaps.

use thiserror::Error;

use crate::models::AddressTag;

/// A partially filled address block.
#[derive(Debug, Error)]
#[error("{tag} address is incomplete: all of street, city, region and postal code are required")]
pub struct IncompleteAddress {
    /// Which block was incomplete.
    pub tag: AddressTag,
}

/// A complete set of address fields, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFields {
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
}

/// Raw form input for one address block. Fields may be absent or blank.
#[derive(Debug, Default, Clone)]
pub struct RawAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
}

impl RawAddress {
    /// Resolve the block into either a complete address or nothing.
    ///
    /// Whitespace-only fields count as blank. Returns `Ok(None)` when every
    /// field is blank, `Ok(Some(..))` when every field is present.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteAddress` when some fields are filled and others
    /// are not.
    pub fn resolve(&self, tag: AddressTag) -> Result<Option<AddressFields>, IncompleteAddress> {
        let street = trimmed(self.street.as_deref());
        let city = trimmed(self.city.as_deref());
        let region = trimmed(self.region.as_deref());
        let postal_code = trimmed(self.postal_code.as_deref());

        match (street, city, region, postal_code) {
            (None, None, None, None) => Ok(None),
            (Some(street), Some(city), Some(region), Some(postal_code)) => {
                Ok(Some(AddressFields {
                    street,
                    city,
                    region,
                    postal_code,
                }))
            }
            _ => Err(IncompleteAddress { tag }),
        }
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> RawAddress {
        RawAddress {
            street: Some("12 Hill Road".to_owned()),
            city: Some("Leeds".to_owned()),
            region: Some("West Yorkshire".to_owned()),
            postal_code: Some("LS1 4AP".to_owned()),
        }
    }

    #[test]
    fn all_fields_present_resolves() {
        let fields = full().resolve(AddressTag::Shipping).unwrap().unwrap();
        assert_eq!(fields.street, "12 Hill Road");
        assert_eq!(fields.postal_code, "LS1 4AP");
    }

    #[test]
    fn all_fields_blank_resolves_to_none() {
        let raw = RawAddress::default();
        assert!(raw.resolve(AddressTag::Billing).unwrap().is_none());
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let raw = RawAddress {
            street: Some("   ".to_owned()),
            city: Some(String::new()),
            region: None,
            postal_code: Some("\t".to_owned()),
        };
        assert!(raw.resolve(AddressTag::Shipping).unwrap().is_none());
    }

    #[test]
    fn partial_block_is_rejected() {
        let mut raw = full();
        raw.city = None;
        let err = raw.resolve(AddressTag::Billing).unwrap_err();
        assert_eq!(err.tag, AddressTag::Billing);
    }

    #[test]
    fn fields_are_trimmed() {
        let mut raw = full();
        raw.street = Some("  12 Hill Road  ".to_owned());
        let fields = raw.resolve(AddressTag::Shipping).unwrap().unwrap();
        assert_eq!(fields.street, "12 Hill Road");
    }
}
