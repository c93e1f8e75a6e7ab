#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/mercado/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Brazilian Real (BRL) currency helpers.
//!
//! - [`format_brl`] - Render an amount as `R$ 1.234,56`
//! - [`parse_brl_to_number`] - Best-effort read of `1.234,56`
//! - [`try_parse_brl`] - Strict read returning an error on garbage
//! - [`format_brl_input`] - Mask a value while the user is typing

/// Amount rendering.
pub mod format;
/// Live input masking.
pub mod input;
/// Amount parsing.
pub mod parse;

pub use format::{BrlValue, format_brl};
pub use input::format_brl_input;
pub use parse::{parse_brl_to_number, try_parse_brl};
