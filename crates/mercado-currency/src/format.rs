//! Rendering of amounts in the Brazilian currency format.

use crate::parse::normalize;

/// Input accepted by [`format_brl`]: a number or a Brazilian-formatted string.
#[derive(Clone, Debug, PartialEq)]
pub enum BrlValue {
    /// Amount in Reais.
    Number(f64),
    /// Text such as `1.234,56`.
    Text(String),
}

impl From<f64> for BrlValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for BrlValue {
    fn from(value: Option<f64>) -> Self {
        Self::Number(value.unwrap_or(0.0))
    }
}

impl From<&str> for BrlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for BrlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl BrlValue {
    /// Returns the numeric amount, degrading malformed or non-finite input to zero.
    #[must_use]
    pub fn amount(&self) -> f64 {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let normalized = normalize(s);
                let trimmed = normalized.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(0.0)
                }
            }
        };
        if n.is_finite() { n } else { 0.0 }
    }
}

/// Formats an amount as Brazilian Reais: `R$ 1.234,56`.
///
/// Strings are read the Brazilian way first (dots are thousands separators,
/// the comma is the decimal point). Anything that does not read as a number
/// renders as `R$ 0,00`. Cents are rounded half away from zero.
///
/// ```
/// use mercado_currency::format_brl;
///
/// assert_eq!(format_brl(1234.56), "R$ 1.234,56");
/// assert_eq!(format_brl("1.234,5"), "R$ 1.234,50");
/// assert_eq!(format_brl("oops"), "R$ 0,00");
/// ```
#[must_use]
pub fn format_brl(value: impl Into<BrlValue>) -> String {
    let amount = value.into().amount();
    let (reais, cents) = split_cents(amount.abs());
    let sign = if amount < 0.0 && (cents > 0 || reais != "0") {
        "-"
    } else {
        ""
    };
    format!("{sign}R$ {},{cents:02}", group_thousands(&reais))
}

/// Smallest magnitude from which every `f64` is a whole number (2^53).
const WHOLE_NUMBERS_FROM: f64 = 9_007_199_254_740_992.0;

/// Splits a non-negative finite amount into whole Reais digits and cents.
fn split_cents(abs: f64) -> (String, u64) {
    if abs >= WHOLE_NUMBERS_FROM {
        return (format!("{abs:.0}"), 0);
    }
    // Below 2^53 the cent count stays well inside u64.
    let cents = (abs * 100.0).round() as u64;
    ((cents / 100).to_string(), cents % 100)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
