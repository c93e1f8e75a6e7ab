//! In-memory directory implementation.

use mercado_core::{Market, MarketDirectory, MarketError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

/// Directory configuration document.
///
/// ```json
/// {"markets": [{"id": "1", "nome": "Mercado Central", "tiposVenda": ["cesta"]}]}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Markets, in display order.
    #[serde(default)]
    pub markets: Vec<Market>,
}

/// Directory held in a `HashMap`, keeping insertion order for listing.
///
/// Built from code, from a [`DirectoryConfig`], or from its JSON form.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    markets: HashMap<String, Market>,
    order: Vec<String>,
}

impl InMemoryDirectory {
    /// Create a new empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from markets, rejecting repeated ids.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::DuplicateMarket`] if an id appears twice.
    pub fn from_markets(markets: impl IntoIterator<Item = Market>) -> Result<Self> {
        let mut directory = Self::new();
        for market in markets {
            if directory.markets.contains_key(&market.id) {
                return Err(MarketError::DuplicateMarket(market.id));
            }
            directory.insert(market);
        }
        debug!(markets = directory.len(), "Built in-memory directory");
        Ok(directory)
    }

    /// Build a directory from a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::DuplicateMarket`] if an id appears twice.
    pub fn from_config(config: DirectoryConfig) -> Result<Self> {
        Self::from_markets(config.markets)
    }

    /// Parse a JSON configuration document and build a directory from it.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Config`] for malformed JSON or unknown enum
    /// values, and [`MarketError::DuplicateMarket`] for repeated ids.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DirectoryConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// Insert or replace a market, returning the previous record.
    pub fn insert(&mut self, market: Market) -> Option<Market> {
        let id = market.id.clone();
        let previous = self.markets.insert(id.clone(), market);
        if previous.is_none() {
            self.order.push(id);
        } else {
            trace!(market_id = %id, "Replaced market");
        }
        previous
    }

    /// Remove a market by id.
    pub fn remove(&mut self, id: &str) -> Option<Market> {
        let removed = self.markets.remove(id);
        if removed.is_some() {
            self.order.retain(|known| known != id);
            debug!(market_id = %id, "Removed market");
        }
        removed
    }

    /// Number of markets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markets.len()
    }

    /// Returns true if the directory has no markets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }

    /// Snapshot of the directory as a configuration document.
    #[must_use]
    pub fn to_config(&self) -> DirectoryConfig {
        DirectoryConfig {
            markets: self.markets(),
        }
    }
}

impl MarketDirectory for InMemoryDirectory {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn market(&self, id: &str) -> Option<Market> {
        let found = self.markets.get(id).cloned();
        if found.is_none() {
            trace!(market_id = %id, "Market not found");
        }
        found
    }

    fn markets(&self) -> Vec<Market> {
        self.order
            .iter()
            .filter_map(|id| self.markets.get(id).cloned())
            .collect()
    }
}
