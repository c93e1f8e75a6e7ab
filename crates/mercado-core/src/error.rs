//! Error types for the strict parsing and configuration paths.
//!
//! Validation failures are not errors: validators return `bool` or a
//! [`PixValidation`](crate::types::PixValidation). [`MarketError`] covers the
//! cases where a caller explicitly asked for a strict parse, and loading a
//! directory configuration.

use thiserror::Error;

/// Errors that can occur in strict parsing or directory configuration.
#[derive(Error, Debug)]
pub enum MarketError {
    /// A date string that is not in an accepted ISO-like shape.
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// A monetary amount that could not be read as a number.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// A periodicity name other than `semanal` or `quinzenal`.
    #[error("Unknown periodicity: {0:?}")]
    UnknownPeriodicity(String),

    /// A sale type name other than `cesta`, `lote` or `venda_direta`.
    #[error("Unknown sale type: {0:?}")]
    UnknownSaleType(String),

    /// A market status other than `ativo` or `inativo`.
    #[error("Unknown market status: {0:?}")]
    UnknownStatus(String),

    /// The same market id appears more than once in a directory.
    #[error("Duplicate market id: {0}")]
    DuplicateMarket(String),

    /// Malformed directory configuration document.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using [`MarketError`].
pub type Result<T> = std::result::Result<T, MarketError>;
