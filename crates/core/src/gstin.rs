//! GSTIN value object.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Validated GSTIN: the fixed-format 15-character Indian GST
/// identification number.
///
/// Shape: 2 digits (state code), 5 uppercase letters and 4 digits and 1
/// uppercase letter (PAN), 1 entity code in `[1-9A-Z]`, a literal `Z`,
/// and 1 check character in `[0-9A-Z]`. Lowercase input is rejected, not
/// normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gstin(String);

impl Gstin {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let raw = s.trim();
        let bytes = raw.as_bytes();
        if bytes.len() != 15 {
            return Err(DomainError::validation(
                "GSTIN must be exactly 15 characters",
            ));
        }

        let shape_ok = bytes[..2].iter().all(u8::is_ascii_digit)
            && bytes[2..7].iter().all(u8::is_ascii_uppercase)
            && bytes[7..11].iter().all(u8::is_ascii_digit)
            && bytes[11].is_ascii_uppercase()
            && (bytes[12].is_ascii_uppercase() || (b'1'..=b'9').contains(&bytes[12]))
            && bytes[13] == b'Z'
            && (bytes[14].is_ascii_uppercase() || bytes[14].is_ascii_digit());

        if !shape_ok {
            return Err(DomainError::validation("malformed GSTIN"));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Gstin {}

impl core::fmt::Display for Gstin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Gstin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_gstin() {
        let gstin = Gstin::parse("29ABCDE1234F1Z5").unwrap();
        assert_eq!(gstin.as_str(), "29ABCDE1234F1Z5");
    }

    #[test]
    fn accepts_surrounding_whitespace() {
        let gstin = Gstin::parse("  29ABCDE1234F1Z5 ").unwrap();
        assert_eq!(gstin.as_str(), "29ABCDE1234F1Z5");
    }

    #[test]
    fn rejects_lowercase() {
        assert!(Gstin::parse("29abcde1234f1z5").is_err());
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(Gstin::parse("1234567890").is_err());
    }

    #[test]
    fn rejects_missing_z_marker() {
        // Position 14 must be the literal 'Z'.
        assert!(Gstin::parse("29ABCDE1234F1X5").is_err());
    }

    #[test]
    fn rejects_zero_entity_code() {
        // The entity code excludes '0'.
        assert!(Gstin::parse("29ABCDE1234F0Z5").is_err());
    }

    #[test]
    fn parse_failure_is_a_validation_error() {
        let err = Gstin::parse("").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
