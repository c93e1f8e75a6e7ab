//! Market directory trait and the lookup rules built on it.
//!
//! Market data is injected through [`MarketDirectory`] rather than baked into
//! the lookup functions. The functions here apply the fallback rules:
//!
//! - [`allowed_sale_types`] - Sale types a market accepts, all of them when unknown
//! - [`market_administrator`] - Administrator name, empty when unknown
//! - [`market_name`] - Market name, empty when unknown
//! - [`active_markets`] - Markets currently operating

use std::fmt::Debug;

use crate::periodicity::SaleType;
use crate::types::Market;

/// Source of market records.
///
/// Implementations must be cheap to query; lookups happen on every form
/// render.
pub trait MarketDirectory: Send + Sync + Debug {
    /// Returns the name of this directory (e.g., "in-memory").
    fn name(&self) -> &str;

    /// Looks up a market by id.
    fn market(&self, id: &str) -> Option<Market>;

    /// Returns every market, in the directory's own order.
    fn markets(&self) -> Vec<Market>;

    /// Returns true if the directory knows the id.
    fn contains(&self, id: &str) -> bool {
        self.market(id).is_some()
    }
}

/// Returns the sale types allowed for a market.
///
/// Unknown ids fall back to every [`SaleType`].
#[must_use]
pub fn allowed_sale_types(directory: &dyn MarketDirectory, market_id: &str) -> Vec<SaleType> {
    directory
        .market(market_id)
        .map_or_else(|| SaleType::ALL.to_vec(), |m| m.sale_types)
}

/// Returns the administrator responsible for a market, or an empty string.
#[must_use]
pub fn market_administrator(directory: &dyn MarketDirectory, market_id: &str) -> String {
    directory
        .market(market_id)
        .and_then(|m| m.administrator)
        .unwrap_or_default()
}

/// Returns the display name of a market, or an empty string.
#[must_use]
pub fn market_name(directory: &dyn MarketDirectory, market_id: &str) -> String {
    directory
        .market(market_id)
        .map(|m| m.name)
        .unwrap_or_default()
}

/// Returns the markets whose status is active.
#[must_use]
pub fn active_markets(directory: &dyn MarketDirectory) -> Vec<Market> {
    directory
        .markets()
        .into_iter()
        .filter(Market::is_active)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MarketStatus;

    #[derive(Debug)]
    struct Fixed(Vec<Market>);

    impl MarketDirectory for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn market(&self, id: &str) -> Option<Market> {
            self.0.iter().find(|m| m.id == id).cloned()
        }

        fn markets(&self) -> Vec<Market> {
            self.0.clone()
        }
    }

    fn directory() -> Fixed {
        Fixed(vec![
            Market::new("1", "Mercado Central")
                .with_sale_types([SaleType::Cesta])
                .with_administrator("João Silva"),
            Market::new("9", "Feira Fechada").with_status(MarketStatus::Inactive),
        ])
    }

    #[test]
    fn test_allowed_sale_types_known_and_fallback() {
        let dir = directory();
        assert_eq!(allowed_sale_types(&dir, "1"), vec![SaleType::Cesta]);
        assert_eq!(
            allowed_sale_types(&dir, "42"),
            vec![SaleType::Cesta, SaleType::Lote, SaleType::VendaDireta]
        );
    }

    #[test]
    fn test_name_and_administrator_lookups() {
        let dir = directory();
        assert_eq!(market_name(&dir, "1"), "Mercado Central");
        assert_eq!(market_administrator(&dir, "1"), "João Silva");
        assert_eq!(market_name(&dir, "42"), "");
        assert_eq!(market_administrator(&dir, "42"), "");
        // Known market without an administrator.
        assert_eq!(market_administrator(&dir, "9"), "");
    }

    #[test]
    fn test_active_markets() {
        let dir = directory();
        let active = active_markets(&dir);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "1");
        assert!(dir.contains("9"));
        assert!(!dir.contains("42"));
    }
}
