//! Scanned barcode value
//!
//! UPC-A codes are 12 digits; the same product is often listed under its
//! 13-digit EAN form with a leading zero. Providers are inconsistent about
//! which form they index, so both are tried.

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Barcode(String);

impl Barcode {
    /// Trim and validate a scanned code
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(AppError::BadRequest("barcode must not be empty".to_string()));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Candidate strings to try, original first
    pub fn variants(&self) -> Vec<String> {
        let code = self.0.as_str();
        let all_digits = code.chars().all(|c| c.is_ascii_digit());

        let mut variants = vec![code.to_string()];
        if all_digits && code.len() == 13 && code.starts_with('0') {
            variants.push(code[1..].to_string());
        } else if all_digits && code.len() == 12 {
            variants.push(format!("0{}", code));
        }
        variants
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_digits_with_leading_zero() {
        let code = Barcode::parse("0012345678905").unwrap();
        assert_eq!(code.variants(), vec!["0012345678905", "012345678905"]);
    }

    #[test]
    fn twelve_digits_gain_leading_zero() {
        let code = Barcode::parse("012345678905").unwrap();
        assert_eq!(code.variants(), vec!["012345678905", "0012345678905"]);
    }

    #[test]
    fn thirteen_digits_without_leading_zero_are_left_alone() {
        let code = Barcode::parse("4006381333931").unwrap();
        assert_eq!(code.variants(), vec!["4006381333931"]);
    }

    #[test]
    fn other_lengths_and_non_digits_are_left_alone() {
        assert_eq!(Barcode::parse("96385074").unwrap().variants(), vec!["96385074"]);
        assert_eq!(
            Barcode::parse("01234567890A").unwrap().variants(),
            vec!["01234567890A"]
        );
    }

    #[test]
    fn parse_trims_and_rejects_empty() {
        assert_eq!(Barcode::parse("  123 ").unwrap().as_str(), "123");
        assert!(matches!(Barcode::parse("   "), Err(AppError::BadRequest(_))));
    }
}
