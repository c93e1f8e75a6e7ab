//! Directory that knows no market.

use mercado_core::{Market, MarketDirectory};
use tracing::trace;

/// A directory with no markets.
///
/// Every lookup misses, so the lookup rules fall back to their defaults: all
/// sale types allowed, empty names and administrators. Useful before market
/// data is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDirectory;

impl EmptyDirectory {
    /// Create a new empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MarketDirectory for EmptyDirectory {
    fn name(&self) -> &str {
        "empty"
    }

    fn market(&self, id: &str) -> Option<Market> {
        trace!(market_id = %id, "EmptyDirectory: market called, returning None");
        None
    }

    fn markets(&self) -> Vec<Market> {
        trace!("EmptyDirectory: markets called, returning nothing");
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercado_core::{
        SaleType, active_markets, allowed_sale_types, market_administrator, market_name,
    };

    #[test]
    fn test_empty_directory_falls_back() {
        let directory = EmptyDirectory::new();
        assert!(directory.market("1").is_none());
        assert!(!directory.contains("1"));
        assert_eq!(allowed_sale_types(&directory, "1"), SaleType::ALL.to_vec());
        assert_eq!(market_name(&directory, "1"), "");
        assert_eq!(market_administrator(&directory, "1"), "");
        assert!(active_markets(&directory).is_empty());
    }

    #[test]
    fn test_empty_directory_is_copy() {
        let first = EmptyDirectory::new();
        let second = first;
        assert_eq!(first.name(), second.name());
    }
}
