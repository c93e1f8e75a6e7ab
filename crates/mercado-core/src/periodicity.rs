//! Sales-cycle periodicity and sale type definitions.
//!
//! This module defines [`Periodicity`] for the length of an offer window and
//! [`SaleType`] for the ways a market sells supplier products.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MarketError;

/// Length of a sales cycle's offer window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Periodicity {
    /// Seven-day cycle.
    #[default]
    #[serde(rename = "semanal")]
    Weekly,
    /// Fourteen-day cycle.
    #[serde(rename = "quinzenal")]
    Biweekly,
}

impl Periodicity {
    /// Returns the number of days an offer window stays open.
    #[must_use]
    pub const fn days(&self) -> i64 {
        match self {
            Self::Weekly => 7,
            Self::Biweekly => 14,
        }
    }

    /// Returns the wire name (`semanal` or `quinzenal`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "semanal",
            Self::Biweekly => "quinzenal",
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semanal" => Ok(Self::Weekly),
            "quinzenal" => Ok(Self::Biweekly),
            other => Err(MarketError::UnknownPeriodicity(other.to_string())),
        }
    }
}

/// How a market sells supplier products.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleType {
    /// Pre-assembled baskets.
    Cesta,
    /// Bulk lots.
    Lote,
    /// Direct sale to the consumer.
    VendaDireta,
}

impl SaleType {
    /// Every sale type, in display order.
    pub const ALL: [Self; 3] = [Self::Cesta, Self::Lote, Self::VendaDireta];

    /// Returns the wire name (`cesta`, `lote` or `venda_direta`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cesta => "cesta",
            Self::Lote => "lote",
            Self::VendaDireta => "venda_direta",
        }
    }

    /// Returns the emoji-prefixed label shown in the UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cesta => "🧺 Cesta",
            Self::Lote => "📦 Lote",
            Self::VendaDireta => "🏬 Venda Direta",
        }
    }
}

impl fmt::Display for SaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaleType {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cesta" => Ok(Self::Cesta),
            "lote" => Ok(Self::Lote),
            "venda_direta" => Ok(Self::VendaDireta),
            other => Err(MarketError::UnknownSaleType(other.to_string())),
        }
    }
}

/// Returns the label for a sale type given by its wire name.
///
/// Unknown names are echoed back unchanged.
#[must_use]
pub fn sale_type_label(tipo: &str) -> String {
    tipo.parse::<SaleType>()
        .map_or_else(|_| tipo.to_string(), |t| t.label().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodicity_days() {
        assert_eq!(Periodicity::Weekly.days(), 7);
        assert_eq!(Periodicity::Biweekly.days(), 14);
    }

    #[test]
    fn test_periodicity_wire_names() {
        assert_eq!("semanal".parse::<Periodicity>().unwrap(), Periodicity::Weekly);
        assert_eq!("quinzenal".parse::<Periodicity>().unwrap(), Periodicity::Biweekly);
        assert!("mensal".parse::<Periodicity>().is_err());
        assert_eq!(
            serde_json::to_string(&Periodicity::Biweekly).unwrap(),
            "\"quinzenal\""
        );
    }

    #[test]
    fn test_sale_type_serde() {
        let json = serde_json::to_string(&SaleType::VendaDireta).unwrap();
        assert_eq!(json, "\"venda_direta\"");
        let back: SaleType = serde_json::from_str("\"lote\"").unwrap();
        assert_eq!(back, SaleType::Lote);
    }

    #[test]
    fn test_sale_type_label() {
        assert_eq!(sale_type_label("cesta"), "🧺 Cesta");
        assert_eq!(sale_type_label("lote"), "📦 Lote");
        assert_eq!(sale_type_label("venda_direta"), "🏬 Venda Direta");
        assert_eq!(sale_type_label("atacado"), "atacado");
        assert_eq!(sale_type_label(""), "");
    }
}
