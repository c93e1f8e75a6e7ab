#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/mercado/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and traits for the marketplace back-office utilities.
//!
//! This crate provides the shared foundations:
//!
//! - [`MarketDirectory`](directory::MarketDirectory) - Injected source of market records
//! - [`Periodicity`](periodicity::Periodicity) - Offer window length of a sales cycle
//! - [`SaleType`](periodicity::SaleType) - Basket, lot or direct sale
//! - [`PixValidation`](types::PixValidation) - Outcome of PIX key classification
//! - [`MarketError`](error::MarketError) - Errors of the strict parsing paths

/// Market directory trait and lookup rules.
pub mod directory;
/// Error types for strict parsing and configuration.
pub mod error;
/// Periodicity and sale type definitions.
pub mod periodicity;
/// Core value types (Market, CycleData, PixValidation, etc.).
pub mod types;

// Re-export commonly used items at crate root
pub use directory::{
    MarketDirectory, active_markets, allowed_sale_types, market_administrator, market_name,
};
pub use error::{MarketError, Result};
pub use periodicity::{Periodicity, SaleType, sale_type_label};
pub use types::{
    CycleData, INVALID_PIX_KEY_MESSAGE, Market, MarketStatus, PixKeyKind, PixValidation,
};
