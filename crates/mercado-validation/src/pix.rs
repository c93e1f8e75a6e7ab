//! PIX key classification.

use regex::Regex;
use std::sync::LazyLock;

use mercado_core::{PixKeyKind, PixValidation};

use crate::contact::{MOBILE_DIGITS, validate_email, validate_mobile};
use crate::document::{only_digits, validate_cnpj, validate_cpf};

/// Random key ("chave aleatória"): 32 ASCII alphanumerics.
static EVP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{32}$").expect("evp pattern is valid"));

/// Classifies a PIX key by shape.
///
/// Shapes are tried in a fixed order and the first match wins: e-mail,
/// mobile number (11 digits), CPF, CNPJ (14 digits), random key (32
/// alphanumerics on the raw text). Because every 11-digit key is taken as a
/// mobile number, a key that is also a valid CPF is reported as `celular`.
///
/// ```
/// use mercado_core::PixKeyKind;
/// use mercado_validation::validate_pix_key;
///
/// let result = validate_pix_key("11.222.333/0001-81");
/// assert!(result.valid);
/// assert_eq!(result.kind, Some(PixKeyKind::Cnpj));
/// ```
#[must_use]
pub fn validate_pix_key(chave: &str) -> PixValidation {
    let digits = only_digits(chave);

    if validate_email(chave) {
        return PixValidation::valid(PixKeyKind::Email);
    }
    if digits.len() == MOBILE_DIGITS && validate_mobile(chave) {
        return PixValidation::valid(PixKeyKind::Celular);
    }
    if digits.len() == 11 && validate_cpf(&digits) {
        return PixValidation::valid(PixKeyKind::Cpf);
    }
    if digits.len() == 14 && validate_cnpj(&digits) {
        return PixValidation::valid(PixKeyKind::Cnpj);
    }
    if EVP.is_match(chave) {
        return PixValidation::valid(PixKeyKind::Evp);
    }

    PixValidation::invalid()
}
