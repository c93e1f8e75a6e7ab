//! Masking of currency input while the user types.

/// Maximum number of digits kept after the decimal comma.
const MAX_FRACTION_DIGITS: usize = 2;

/// Cleans a partially typed amount.
///
/// Keeps ASCII digits and commas only. The first comma is the decimal
/// separator; digits after any later comma join the fraction, which is then
/// cut to two digits. The result is still text, echoed back into the field.
///
/// ```
/// use mercado_currency::format_brl_input;
///
/// assert_eq!(format_brl_input("R$ 12,345,67"), "12,34");
/// assert_eq!(format_brl_input("12,"), "12,");
/// ```
#[must_use]
pub fn format_brl_input(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();

    match cleaned.split_once(',') {
        Some((integer, rest)) => {
            let fraction: String = rest
                .chars()
                .filter(|c| *c != ',')
                .take(MAX_FRACTION_DIGITS)
                .collect();
            format!("{integer},{fraction}")
        }
        None => cleaned,
    }
}
