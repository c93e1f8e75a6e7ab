//! Validation of a supplier's personal and payment data form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::bank::{validate_account, validate_agency};
use crate::contact::validate_mobile;
use crate::pix::validate_pix_key;

/// Personal and payment data a supplier keeps on file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierProfile {
    /// Full legal name.
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,
    /// Mobile number.
    #[serde(rename = "celular")]
    pub mobile: String,
    /// Bank name.
    #[serde(rename = "banco")]
    pub bank: String,
    /// Bank agency.
    #[serde(rename = "agencia")]
    pub agency: String,
    /// Bank account, `body-check`.
    #[serde(rename = "conta")]
    pub account: String,
    /// PIX key.
    #[serde(rename = "chavePix")]
    pub pix_key: String,
    /// Privacy policy and terms acceptance.
    #[serde(rename = "aceitePolitica")]
    pub accepted_policy: bool,
}

/// Field name to user-facing message, keyed by the form's field names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProfileErrors(BTreeMap<&'static str, String>);

impl ProfileErrors {
    /// Returns true if the form has no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with an error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Iterates over `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Checks a supplier profile form and returns the errors per field.
///
/// Blank required fields get a "required" message; filled fields that fail
/// their validator get a format message. An empty result means the form can
/// be saved.
#[must_use]
pub fn validate_profile(profile: &SupplierProfile) -> ProfileErrors {
    let mut errors = ProfileErrors::default();

    if profile.full_name.trim().is_empty() {
        errors.insert("nomeCompleto", "Nome completo é obrigatório");
    }

    if profile.mobile.trim().is_empty() {
        errors.insert("celular", "Celular é obrigatório");
    } else if !validate_mobile(&profile.mobile) {
        errors.insert(
            "celular",
            "Informe um celular válido no formato (11) 95555-9999.",
        );
    }

    if profile.bank.is_empty() {
        errors.insert("banco", "Banco é obrigatório");
    }

    if profile.agency.trim().is_empty() {
        errors.insert("agencia", "Agência é obrigatória");
    } else if !validate_agency(&profile.agency) {
        errors.insert("agencia", "Agência deve ter 4 ou 5 dígitos.");
    }

    if profile.account.trim().is_empty() {
        errors.insert("conta", "Conta é obrigatória");
    } else if !validate_account(&profile.account) {
        errors.insert("conta", "Conta deve estar no formato 123456-7.");
    }

    if profile.pix_key.trim().is_empty() {
        errors.insert("chavePix", "Chave PIX é obrigatória");
    } else {
        let pix = validate_pix_key(&profile.pix_key);
        if !pix.valid {
            errors.insert(
                "chavePix",
                pix.message.unwrap_or_else(|| "Chave PIX inválida".to_string()),
            );
        }
    }

    if !profile.accepted_policy {
        errors.insert(
            "aceitePolitica",
            "É obrigatório aceitar a Política de Privacidade e Termos de Uso",
        );
    }

    errors
}
