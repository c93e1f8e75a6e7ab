#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/mercado/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Sales-cycle naming and scheduling arithmetic.
//!
//! - [`cycle_name`] - `"2º Ciclo de Outubro 2025"` from a start date and its siblings
//! - [`offers_end`] - End of the offer window for a periodicity
//! - [`format_date_br`] - `dd/MM/yyyy` display
//! - [`parse_iso`] - The ISO-like date reader shared by the above

/// Date parsing and display.
pub mod date;
/// Cycle naming.
pub mod naming;
/// Offer window arithmetic.
pub mod schedule;

pub use date::{BrDate, format_date_br, month_name_pt, parse_iso};
pub use naming::{cycle_name, try_cycle_name};
pub use schedule::{offers_end, try_offers_end};
