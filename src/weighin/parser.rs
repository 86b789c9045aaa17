//! Contracted-weight text parsing
//!
//! Fight records store the contracted weight as free text ("147 lbs",
//! "135.5"); only the leading numeric token matters.

use once_cell::sync::Lazy;
use regex::Regex;

static POUNDS_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(\.\d+)?)").expect("pounds token pattern is valid"));

/// Extract the contracted weight in pounds from free text.
///
/// Returns `None` when no numeric token is present or the token is not a
/// positive number; the contracted weight is then unresolvable and
/// classification cannot proceed.
pub fn extract_pounds(text: &str) -> Option<f64> {
    let token = POUNDS_TOKEN.find(text)?;
    let pounds: f64 = token.as_str().parse().ok()?;
    if pounds > 0.0 {
        Some(pounds)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_number() {
        assert_eq!(extract_pounds("147"), Some(147.0));
    }

    #[test]
    fn test_extract_with_unit_suffix() {
        assert_eq!(extract_pounds("147 lbs"), Some(147.0));
        assert_eq!(extract_pounds("135.5 libras"), Some(135.5));
    }

    #[test]
    fn test_extract_takes_leading_token() {
        assert_eq!(extract_pounds("126 lbs (pactado 128)"), Some(126.0));
    }

    #[test]
    fn test_extract_no_token() {
        assert_eq!(extract_pounds(""), None);
        assert_eq!(extract_pounds("por definir"), None);
        assert_eq!(extract_pounds("lbs"), None);
    }

    #[test]
    fn test_extract_zero_is_unresolvable() {
        assert_eq!(extract_pounds("0 lbs"), None);
        assert_eq!(extract_pounds("0.0"), None);
    }
}
