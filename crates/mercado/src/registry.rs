//! Market registry for combining several directories with fallback behavior.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, trace};

use mercado_core::{Market, MarketDirectory, SaleType, allowed_sale_types};

/// Registry over several market directories, queried in order.
///
/// A lookup returns the record from the first directory that knows the id.
/// The registry is itself a [`MarketDirectory`], so the lookup rules in
/// `mercado-core` work on it directly.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use mercado::{InMemoryDirectory, MarketRegistry, Market, market_name};
///
/// let mut overrides = InMemoryDirectory::new();
/// overrides.insert(Market::new("1", "Mercado Central (reformado)"));
///
/// let registry = MarketRegistry::new()
///     .with_directory(Arc::new(overrides))
///     .with_sample_data();
///
/// assert_eq!(market_name(&registry, "1"), "Mercado Central (reformado)");
/// assert_eq!(market_name(&registry, "2"), "Mercado Zona Norte");
/// ```
#[derive(Default)]
pub struct MarketRegistry {
    directories: Vec<Arc<dyn MarketDirectory>>,
}

impl std::fmt::Debug for MarketRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketRegistry")
            .field(
                "directories",
                &self
                    .directories
                    .iter()
                    .map(|d| d.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl MarketRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory after the ones already registered.
    pub fn register(&mut self, directory: Arc<dyn MarketDirectory>) {
        debug!(directory = directory.name(), "Registering market directory");
        self.directories.push(directory);
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_directory(mut self, directory: Arc<dyn MarketDirectory>) -> Self {
        self.register(directory);
        self
    }

    /// Number of registered directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directories.len()
    }

    /// Returns true if no directory is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Sale types allowed for a market; all of them when no directory knows it.
    #[must_use]
    pub fn allowed_sale_types(&self, market_id: &str) -> Vec<SaleType> {
        allowed_sale_types(self, market_id)
    }

    /// Add the bundled sales-cycle market table.
    #[cfg(feature = "sample-data")]
    #[must_use]
    pub fn with_sample_data(self) -> Self {
        self.with_directory(Arc::new(
            mercado_directory::InMemoryDirectory::sample_cycle_markets(),
        ))
    }

    /// Add the bundled local market listing.
    #[cfg(feature = "sample-data")]
    #[must_use]
    pub fn with_local_markets(self) -> Self {
        self.with_directory(Arc::new(
            mercado_directory::InMemoryDirectory::sample_local_markets(),
        ))
    }
}

impl MarketDirectory for MarketRegistry {
    fn name(&self) -> &str {
        "registry"
    }

    fn market(&self, id: &str) -> Option<Market> {
        for directory in &self.directories {
            if let Some(market) = directory.market(id) {
                trace!(
                    directory = directory.name(),
                    market_id = %id,
                    "Market found"
                );
                return Some(market);
            }
        }
        debug!(market_id = %id, "No directory knows market, using defaults");
        None
    }

    fn markets(&self) -> Vec<Market> {
        let mut seen = HashSet::new();
        self.directories
            .iter()
            .flat_map(|d| d.markets())
            .filter(|m| seen.insert(m.id.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercado_core::{MarketStatus, active_markets, market_administrator, market_name};
    use mercado_directory::{EmptyDirectory, InMemoryDirectory};

    fn directory(markets: Vec<Market>) -> Arc<dyn MarketDirectory> {
        Arc::new(InMemoryDirectory::from_markets(markets).unwrap())
    }

    #[test]
    fn test_empty_registry_falls_back() {
        let registry = MarketRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.allowed_sale_types("1"), SaleType::ALL.to_vec());
        assert_eq!(market_name(&registry, "1"), "");
        assert!(registry.markets().is_empty());
    }

    #[test]
    fn test_first_directory_wins() {
        let registry = MarketRegistry::new()
            .with_directory(Arc::new(EmptyDirectory::new()))
            .with_directory(directory(vec![
                Market::new("1", "Primeiro").with_sale_types([SaleType::Lote]),
            ]))
            .with_directory(directory(vec![
                Market::new("1", "Segundo").with_administrator("Ana"),
                Market::new("2", "Outro"),
            ]));

        assert_eq!(registry.len(), 3);
        assert_eq!(market_name(&registry, "1"), "Primeiro");
        assert_eq!(registry.allowed_sale_types("1"), vec![SaleType::Lote]);
        // The winning record has no administrator; later directories are not merged in.
        assert_eq!(market_administrator(&registry, "1"), "");
        assert_eq!(market_name(&registry, "2"), "Outro");
    }

    #[test]
    fn test_markets_deduplicated_in_order() {
        let registry = MarketRegistry::new()
            .with_directory(directory(vec![
                Market::new("b", "B").with_status(MarketStatus::Inactive),
            ]))
            .with_directory(directory(vec![Market::new("a", "A"), Market::new("b", "B2")]));

        let ids: Vec<_> = registry.markets().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["b", "a"]);

        let active: Vec<_> = active_markets(&registry)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(active, vec!["a"]);
    }

    #[test]
    fn test_debug_lists_directory_names() {
        let registry = MarketRegistry::new().with_directory(Arc::new(EmptyDirectory::new()));
        assert_eq!(
            format!("{registry:?}"),
            r#"MarketRegistry { directories: ["empty"] }"#
        );
    }

    #[cfg(feature = "sample-data")]
    #[test]
    fn test_sample_data() {
        let registry = MarketRegistry::new().with_sample_data().with_local_markets();
        assert_eq!(market_administrator(&registry, "1"), "João Silva");
        assert_eq!(market_administrator(&registry, "fo"), "Ana Santos");
        assert_eq!(registry.allowed_sale_types("3"), vec![SaleType::VendaDireta]);
        assert_eq!(registry.markets().len(), 7);
    }
}
