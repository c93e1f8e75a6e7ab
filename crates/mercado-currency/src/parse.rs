//! Parsing of Brazilian-formatted amounts.

use mercado_core::{MarketError, Result};

/// Drops thousands separators and turns the first comma into a decimal point.
pub(crate) fn normalize(value: &str) -> String {
    value.replace('.', "").replacen(',', ".", 1)
}

/// Converts a Brazilian-formatted string (`9.999,99`) into a number.
///
/// Empty input yields `0.0`. Text that does not read as a number yields
/// [`f64::NAN`]; the shape of the input is not checked further.
///
/// ```
/// use mercado_currency::parse_brl_to_number;
///
/// assert_eq!(parse_brl_to_number("1.234,56"), 1234.56);
/// assert_eq!(parse_brl_to_number(""), 0.0);
/// assert!(parse_brl_to_number("abc").is_nan());
/// ```
#[must_use]
pub fn parse_brl_to_number(value: &str) -> f64 {
    let normalized = normalize(value);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Strict variant of [`parse_brl_to_number`].
///
/// # Errors
///
/// Returns [`MarketError::InvalidAmount`] when the text is not a finite number.
pub fn try_parse_brl(value: &str) -> Result<f64> {
    let parsed = parse_brl_to_number(value);
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(MarketError::InvalidAmount(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_brazilian_shapes() {
        assert_eq!(parse_brl_to_number("123,45"), 123.45);
        assert_eq!(parse_brl_to_number("1.234,56"), 1234.56);
        assert_eq!(parse_brl_to_number("600.822.115,84"), 600_822_115.84);
        assert_eq!(parse_brl_to_number("12"), 12.0);
        assert_eq!(parse_brl_to_number("12,"), 12.0);
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(parse_brl_to_number(""), 0.0);
        assert_eq!(parse_brl_to_number("   "), 0.0);
    }

    #[test]
    fn test_parse_only_first_comma_is_decimal() {
        // "1,2,3" -> "1.2,3", which is not a number.
        assert!(parse_brl_to_number("1,2,3").is_nan());
    }

    #[test]
    fn test_parse_garbage_is_nan() {
        assert!(parse_brl_to_number("R$ 10,00").is_nan());
        assert!(parse_brl_to_number("dez reais").is_nan());
    }

    #[test]
    fn test_try_parse() {
        assert_eq!(try_parse_brl("2.500,10").unwrap(), 2500.1);
        assert_eq!(try_parse_brl("").unwrap(), 0.0);
        assert!(matches!(
            try_parse_brl("abc"),
            Err(MarketError::InvalidAmount(s)) if s == "abc"
        ));
        assert!(try_parse_brl("inf").is_err());
    }
}
