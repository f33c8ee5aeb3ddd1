//! GTIN structural validation.
//!
//! Accepts GTIN-8, GTIN-12, GTIN-13 and GTIN-14 with a valid mod-10 check
//! digit. Anything else is not a GTIN and falls back to barcode matching.

use std::fmt;
use thiserror::Error;

const VALID_LENGTHS: &[usize] = &[8, 12, 13, 14];

/// A structurally valid GTIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gtin(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GtinParseError {
    #[error("GTIN must be 8, 12, 13 or 14 digits, got {0}")]
    InvalidLength(usize),

    #[error("GTIN must contain only digits")]
    NonNumeric,

    #[error("GTIN check digit mismatch: expected {expected}, got {actual}")]
    CheckDigit { expected: u32, actual: u32 },
}

impl Gtin {
    /// Validate `code` as a GTIN.
    pub fn parse(code: &str) -> Result<Self, GtinParseError> {
        if !VALID_LENGTHS.contains(&code.len()) {
            return Err(GtinParseError::InvalidLength(code.len()));
        }

        let digits: Vec<u32> = code
            .chars()
            .map(|c| c.to_digit(10).ok_or(GtinParseError::NonNumeric))
            .collect::<Result<_, _>>()?;

        let actual = digits[digits.len() - 1];
        let expected = check_digit(&digits[..digits.len() - 1]);
        if actual != expected {
            return Err(GtinParseError::CheckDigit { expected, actual });
        }

        Ok(Gtin(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Gtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// GS1 mod-10 check digit over the payload digits.
///
/// Counting from the right, payload digits at odd positions weigh 3 and
/// even positions weigh 1.
fn check_digit(payload: &[u32]) -> u32 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * 3 } else { *d })
        .sum();
    (10 - sum % 10) % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_gtin13() {
        assert!(Gtin::parse("4006381333931").is_ok());
    }

    #[test]
    fn accepts_valid_gtin8() {
        assert!(Gtin::parse("96385074").is_ok());
    }

    #[test]
    fn accepts_valid_gtin12() {
        assert!(Gtin::parse("036000291452").is_ok());
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert_eq!(
            Gtin::parse("4006381333930"),
            Err(GtinParseError::CheckDigit {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(
            Gtin::parse("12345"),
            Err(GtinParseError::InvalidLength(5))
        );
        assert_eq!(Gtin::parse(""), Err(GtinParseError::InvalidLength(0)));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(Gtin::parse("BARCODE1"), Err(GtinParseError::NonNumeric));
    }
}
