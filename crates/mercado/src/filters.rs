//! Filter state for the back-office listing screens.
//!
//! A [`FilterState`] holds the free-text search and a set of multi-select
//! groups (status, market type, category, ...). It derives the chips shown
//! above a listing and answers whether a record passes the current filters.
//! Snapshots are a flat JSON object (`{"search": "", "status": [], ...}`)
//! so a caller can keep them per route.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use mercado_core::Result;

/// Key of the free-text search; never shown as a chip.
pub const SEARCH_KEY: &str = "search";

/// Default groups, in chip order.
pub const DEFAULT_GROUPS: [&str; 6] = [
    "status",
    "tipo",
    "categoria",
    "produtoBase",
    "perfis",
    "tipoVenda",
];

/// Display label for a filter group; unknown groups show their key.
#[must_use]
pub fn group_label(group: &str) -> &str {
    match group {
        "status" => "Status",
        "tipo" => "Tipo de Mercado",
        "categoria" => "Categoria",
        "produtoBase" => "Produto Base",
        "perfis" => "Perfis",
        "tipoVenda" => "Tipo de Venda",
        other => other,
    }
}

/// A multi-select filter group and its selected values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    /// Group key, e.g. `status`.
    pub key: String,
    /// Selected values, in selection order.
    pub values: Vec<String>,
}

/// A removable chip summarising one active group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChip {
    /// Group key.
    pub group: String,
    /// `"{Label}: v1, v2"`.
    pub label: String,
    /// Value passed back when the chip is removed (the group key).
    pub value: String,
}

/// Search text plus multi-select groups.
///
/// Serialises as one flat object: `search` first, then each group key with
/// its selected values, in group order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search.
    pub search: String,
    groups: Vec<FilterGroup>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            groups: DEFAULT_GROUPS
                .iter()
                .map(|key| FilterGroup {
                    key: (*key).to_string(),
                    values: Vec::new(),
                })
                .collect(),
        }
    }
}

impl FilterState {
    /// Create a state with empty search and the default groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a snapshot produced by [`to_json`](Self::to_json).
    ///
    /// Default groups missing from the snapshot start empty; unknown keys
    /// are appended as extra groups.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Config`](mercado_core::MarketError::Config) for
    /// malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialise the state as a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Config`](mercado_core::MarketError::Config) if
    /// serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Groups in chip order.
    #[must_use]
    pub fn groups(&self) -> &[FilterGroup] {
        &self.groups
    }

    /// Selected values of a group; empty for unknown groups.
    #[must_use]
    pub fn group(&self, key: &str) -> &[String] {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .map(|g| g.values.as_slice())
            .unwrap_or_default()
    }

    fn group_mut(&mut self, key: &str) -> &mut Vec<String> {
        let index = match self.groups.iter().position(|g| g.key == key) {
            Some(index) => index,
            None => {
                self.groups.push(FilterGroup {
                    key: key.to_string(),
                    values: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[index].values
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Replace a group's selection. Unknown groups are appended.
    pub fn set_group(&mut self, key: &str, values: Vec<String>) {
        *self.group_mut(key) = values;
    }

    /// Select `value` in a group, or deselect it if already selected.
    pub fn toggle(&mut self, key: &str, value: &str) {
        let values = self.group_mut(key);
        if let Some(pos) = values.iter().position(|v| v == value) {
            values.remove(pos);
        } else {
            values.push(value.to_string());
        }
    }

    /// Reset search and every group to the default state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Clear one group; `search` clears the search text.
    pub fn clear_group(&mut self, key: &str) {
        if key == SEARCH_KEY {
            self.search.clear();
        } else if let Some(group) = self.groups.iter_mut().find(|g| g.key == key) {
            group.values.clear();
        }
    }

    /// Chips for every group with a selection, in group order.
    #[must_use]
    pub fn active_chips(&self) -> Vec<FilterChip> {
        self.groups
            .iter()
            .filter(|g| !g.values.is_empty())
            .map(|g| FilterChip {
                group: g.key.clone(),
                label: format!("{}: {}", group_label(&g.key), g.values.join(", ")),
                value: g.key.clone(),
            })
            .collect()
    }

    /// Returns true if any group has a selection. The search text is not counted.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.groups.iter().any(|g| !g.values.is_empty())
    }

    /// Case-insensitive substring match of the search text against any field.
    ///
    /// An empty search matches everything.
    #[must_use]
    pub fn matches_search(&self, fields: &[&str]) -> bool {
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || fields
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Returns true if `value` passes a group; an empty selection passes all.
    #[must_use]
    pub fn matches_group(&self, key: &str, value: &str) -> bool {
        let selected = self.group(key);
        selected.is_empty() || selected.iter().any(|v| v == value)
    }
}

impl Serialize for FilterState {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len() + 1))?;
        map.serialize_entry(SEARCH_KEY, &self.search)?;
        for group in &self.groups {
            map.serialize_entry(&group.key, &group.values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FilterState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(FilterStateVisitor)
    }
}

struct FilterStateVisitor;

impl<'de> Visitor<'de> for FilterStateVisitor {
    type Value = FilterState;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of search text and filter groups")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
    ) -> std::result::Result<FilterState, A::Error> {
        let mut state = FilterState::default();
        while let Some(key) = access.next_key::<String>()? {
            if key == SEARCH_KEY {
                state.search = access.next_value()?;
            } else {
                let values: Vec<String> = access.next_value()?;
                state.set_group(&key, values);
            }
        }
        Ok(state)
    }
}
