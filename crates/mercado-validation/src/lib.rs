#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/mercado/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Stateless validators for Brazilian documents, contacts, bank data and PIX keys.
//!
//! Every validator is total: invalid input is an expected outcome reported in
//! the return value, never a panic or an error.
//!
//! - [`validate_cpf`] / [`validate_cnpj`] - Taxpayer numbers with check digits
//! - [`validate_email`] / [`validate_mobile`] - Contact data
//! - [`validate_agency`] / [`validate_account`] - Bank data
//! - [`validate_pix_key`] - PIX key classification
//! - [`validate_profile`] - The supplier personal data form

/// Bank agency and account rules.
pub mod bank;
/// E-mail and mobile number rules.
pub mod contact;
/// CPF and CNPJ check digits.
pub mod document;
/// PIX key classification.
pub mod pix;
/// Supplier profile form validation.
pub mod profile;

pub use bank::{validate_account, validate_agency};
pub use contact::{validate_email, validate_mobile};
pub use document::{only_digits, validate_cnpj, validate_cpf};
pub use pix::validate_pix_key;
pub use profile::{ProfileErrors, SupplierProfile, validate_profile};
