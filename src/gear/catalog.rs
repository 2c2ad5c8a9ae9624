//! Persisted item catalog.
//!
//! Items are keyed by name; retiring an item clears its `active` flag
//! instead of deleting it, so historical rankings stay reproducible.

use super::types::Item;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::io;
use tracing::debug;

const CATALOG_FILE: &str = "item_catalog.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from ~/.skyskills/, empty if missing or invalid.
    pub fn load() -> Self {
        persistence::load_json_or_default(CATALOG_FILE)
    }

    pub fn save(&self) -> io::Result<()> {
        persistence::save_json(CATALOG_FILE, self)
    }

    /// Insert an item, replacing any existing entry with the same name.
    pub fn upsert(&mut self, item: Item) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.name == item.name) {
            debug!(name = %item.name, "replacing catalog item");
            *existing = item;
        } else {
            self.items.push(item);
        }
    }

    /// Retire an item without deleting it. Returns false if not found.
    pub fn deactivate(&mut self, name: &str) -> bool {
        match self.items.iter_mut().find(|i| i.name == name) {
            Some(item) => {
                item.active = false;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Items still eligible for recommendation computation.
    pub fn active_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.active)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::types::{ItemCategory, Rarity, STAT_SCC};

    fn rod(name: &str) -> Item {
        Item::new(name, ItemCategory::Rod, Rarity::Rare).with_stat(STAT_SCC, 4.0)
    }

    #[test]
    fn test_upsert_inserts_and_replaces() {
        let mut catalog = ItemCatalog::new();
        catalog.upsert(rod("Sponge Rod"));
        assert_eq!(catalog.len(), 1);

        let upgraded = rod("Sponge Rod").with_stat(STAT_SCC, 6.0);
        catalog.upsert(upgraded);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Sponge Rod").unwrap().stat(STAT_SCC), 6.0);
    }

    #[test]
    fn test_deactivate_keeps_item() {
        let mut catalog = ItemCatalog::new();
        catalog.upsert(rod("Old Rod"));

        assert!(catalog.deactivate("Old Rod"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.active_items().count(), 0);
        assert!(!catalog.get("Old Rod").unwrap().active);
    }

    #[test]
    fn test_deactivate_missing_returns_false() {
        let mut catalog = ItemCatalog::new();
        assert!(!catalog.deactivate("Ghost Rod"));
    }

    #[test]
    fn test_active_items_filters() {
        let mut catalog = ItemCatalog::new();
        catalog.upsert(rod("Keeper"));
        catalog.upsert(rod("Retired"));
        catalog.deactivate("Retired");

        let names: Vec<&str> = catalog.active_items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Keeper"]);
    }

    #[test]
    fn test_catalog_round_trip_json() {
        let mut catalog = ItemCatalog::new();
        catalog.upsert(rod("Sponge Rod"));
        catalog.deactivate("Sponge Rod");

        let json = serde_json::to_string(&catalog).unwrap();
        let back: ItemCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert!(!back.get("Sponge Rod").unwrap().active);
    }
}
