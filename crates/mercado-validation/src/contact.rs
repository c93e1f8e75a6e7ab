//! E-mail and mobile number validation.

use regex::Regex;
use std::sync::LazyLock;

use crate::document::only_digits;

/// `local@domain.tld` shape; not a full RFC 5322 check.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Digits in a Brazilian mobile number: 2-digit area code + 9-digit number.
pub const MOBILE_DIGITS: usize = 11;

/// Validates the rough shape of an e-mail address.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Validates a mobile number: exactly 11 digits once formatting is removed.
#[must_use]
pub fn validate_mobile(celular: &str) -> bool {
    only_digits(celular).len() == MOBILE_DIGITS
}
