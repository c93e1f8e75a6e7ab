//! CPF and CNPJ check-digit validation.

/// Returns the ASCII digits of `value`, dropping everything else.
#[must_use]
pub fn only_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn digit_values(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_equal(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// CPF check digit over `digits`, weights descending from `len + 1` to 2.
fn cpf_check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(d, w)| d * w)
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}

/// CNPJ check digit over `digits`, weights cycling 9..2 from the right.
fn cnpj_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip((2..=9).cycle())
        .map(|(d, w)| d * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Validates a CPF (individual taxpayer number).
///
/// Non-digits are ignored. Exactly 11 digits must remain, not all equal, and
/// both modulo-11 check digits must match.
///
/// ```
/// use mercado_validation::validate_cpf;
///
/// assert!(validate_cpf("529.982.247-25"));
/// assert!(!validate_cpf("111.111.111-11"));
/// ```
#[must_use]
pub fn validate_cpf(cpf: &str) -> bool {
    let digits = digit_values(cpf);
    if digits.len() != 11 || all_equal(&digits) {
        return false;
    }
    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

/// Validates a CNPJ (company taxpayer number).
///
/// Non-digits are ignored. Exactly 14 digits must remain, not all equal, and
/// both check digits must match.
#[must_use]
pub fn validate_cnpj(cnpj: &str) -> bool {
    let digits = digit_values(cnpj);
    if digits.len() != 14 || all_equal(&digits) {
        return false;
    }
    cnpj_check_digit(&digits[..12]) == digits[12] && cnpj_check_digit(&digits[..13]) == digits[13]
}
