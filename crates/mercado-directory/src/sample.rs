//! Bundled sample market tables.
//!
//! Two tables ship with the back-office mock data. They use different id
//! schemes and are kept apart: [`cycle_markets`] backs the sales-cycle
//! screens, [`local_markets`] the market listing.

use mercado_core::{Market, MarketStatus, SaleType};

use crate::memory::InMemoryDirectory;

/// Markets used by the sales-cycle screens (ids `1`, `2`, `3`).
#[must_use]
pub fn cycle_markets() -> Vec<Market> {
    vec![
        Market::new("1", "Mercado Central")
            .with_sale_types([SaleType::Cesta])
            .with_administrator("João Silva"),
        Market::new("2", "Mercado Zona Norte")
            .with_sale_types([SaleType::Cesta, SaleType::Lote])
            .with_administrator("Anna Cardoso"),
        Market::new("3", "Feira Livre")
            .with_sale_types([SaleType::VendaDireta])
            .with_administrator("Maria Santos"),
    ]
}

/// Local markets shown in the market listing (ids `mc`, `mv`, `sl`, `fo`).
#[must_use]
pub fn local_markets() -> Vec<Market> {
    vec![
        Market::new("mc", "Mercado Central")
            .with_sale_types([SaleType::Cesta])
            .with_administrator("Fernanda Lima"),
        Market::new("mv", "Mercado da Vila")
            .with_status(MarketStatus::Inactive)
            .with_sale_types([SaleType::Lote])
            .with_administrator("Carlos Silva"),
        Market::new("sl", "Supermercado Local")
            .with_sale_types([SaleType::VendaDireta])
            .with_administrator("Fernanda Lima"),
        Market::new("fo", "Feira Orgânica")
            .with_sale_types([SaleType::Cesta])
            .with_administrator("Ana Santos"),
    ]
}

impl InMemoryDirectory {
    /// Directory over [`cycle_markets`].
    #[must_use]
    pub fn sample_cycle_markets() -> Self {
        let mut directory = Self::new();
        for market in cycle_markets() {
            directory.insert(market);
        }
        directory
    }

    /// Directory over [`local_markets`].
    #[must_use]
    pub fn sample_local_markets() -> Self {
        let mut directory = Self::new();
        for market in local_markets() {
            directory.insert(market);
        }
        directory
    }
}
