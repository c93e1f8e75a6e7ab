#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/mercado/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Domain validation and derived-computation utilities for an agricultural
//! marketplace back-office.
//!
//! This crate re-exports the core types, the currency, validation and cycle
//! helpers, and the directory implementations. It adds a
//! [`MarketRegistry`] for combining several market directories with fallback
//! behavior, and the [`FilterState`] used by listing screens.
//!
//! # Features
//!
//! - `sample-data` - Bundled mock market tables (default)
//!
//! # Example
//!
//! ```rust
//! use mercado::{
//!     CycleData, MarketRegistry, Periodicity, PixKeyKind, cycle_name, format_brl, offers_end,
//!     validate_pix_key,
//! };
//!
//! assert_eq!(format_brl("1.234,5"), "R$ 1.234,50");
//! assert_eq!(validate_pix_key("11987654321").kind, Some(PixKeyKind::Celular));
//!
//! let siblings = [CycleData::new("2025-10-13T00:00")];
//! assert_eq!(cycle_name("2025-10-13T00:00", &siblings), "1º Ciclo de Outubro 2025");
//! assert_eq!(offers_end("2025-10-13T00:00", Periodicity::Biweekly), "2025-10-27T00:00");
//!
//! let registry = MarketRegistry::new().with_sample_data();
//! assert_eq!(registry.allowed_sale_types("9").len(), 3);
//! ```

// Core types and traits
pub use mercado_core::*;

// Helpers
pub use mercado_currency::{
    BrlValue, format_brl, format_brl_input, parse_brl_to_number, try_parse_brl,
};
pub use mercado_cycle::{
    BrDate, cycle_name, format_date_br, month_name_pt, offers_end, parse_iso, try_cycle_name,
    try_offers_end,
};
pub use mercado_validation::{
    ProfileErrors, SupplierProfile, only_digits, validate_account, validate_agency,
    validate_cnpj, validate_cpf, validate_email, validate_mobile, validate_pix_key,
    validate_profile,
};

// Directories
#[cfg(feature = "sample-data")]
pub use mercado_directory::sample;
pub use mercado_directory::{DirectoryConfig, EmptyDirectory, InMemoryDirectory};

/// Filter state for listing screens.
pub mod filters;
mod registry;

pub use filters::{FilterChip, FilterGroup, FilterState};
pub use registry::MarketRegistry;
