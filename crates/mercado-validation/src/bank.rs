//! Bank agency and account validation.

use regex::Regex;
use std::sync::LazyLock;

use crate::document::only_digits;

static ACCOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,12}-[0-9]$").expect("account pattern is valid"));

/// Validates a bank agency: 4 or 5 digits once formatting is removed.
#[must_use]
pub fn validate_agency(agencia: &str) -> bool {
    let digits = only_digits(agencia);
    (4..=5).contains(&digits.len())
}

/// Validates a bank account written as `body-check`, e.g. `123456-7`.
///
/// The raw text is checked: 1 to 12 digits, one hyphen, one check digit.
#[must_use]
pub fn validate_account(conta: &str) -> bool {
    ACCOUNT.is_match(conta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agency() {
        assert!(validate_agency("1234"));
        assert!(validate_agency("12345"));
        assert!(validate_agency("1234-5"));
        assert!(!validate_agency("123"));
        assert!(!validate_agency("123456"));
        assert!(!validate_agency(""));
    }

    #[test]
    fn test_account() {
        assert!(validate_account("123456-7"));
        assert!(validate_account("56789-0"));
        assert!(validate_account("1-0"));
        assert!(validate_account("123456789012-3"));
        assert!(!validate_account("1234567"));
        assert!(!validate_account("1234567890123-4"));
        assert!(!validate_account("123-45"));
        assert!(!validate_account("12-3-4"));
        assert!(!validate_account(" 123-4"));
        assert!(!validate_account("-4"));
    }
}
