#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/mercado/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Market directory implementations.
//!
//! This crate provides implementations of the [`MarketDirectory`] trait from `mercado-core`:
//!
//! - [`InMemoryDirectory`] - Configurable directory, built in code or from JSON
//! - [`EmptyDirectory`] - Directory with no markets; every lookup falls back
//! - [`sample`] - The bundled mock tables (requires `sample-data` feature)

/// Directory with no markets.
pub mod empty;
/// In-memory directory implementation.
pub mod memory;

/// Bundled sample market tables.
#[cfg(feature = "sample-data")]
pub mod sample;

// Re-export the trait for convenience
pub use mercado_core::MarketDirectory;

// Re-export implementations
pub use empty::EmptyDirectory;
pub use memory::{DirectoryConfig, InMemoryDirectory};
