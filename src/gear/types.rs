//! Item and gear set catalog types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Canonical stat key for Sea Creature Chance.
pub const STAT_SCC: &str = "scc";
/// Canonical stat key for Fishing Speed.
pub const STAT_FS: &str = "fs";

/// Where an item sits in a fishing loadout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Rod,
    Helmet,
    Chestplate,
    Leggings,
    Boots,
    Pet,
    Accessory,
    Equipment,
    Bait,
}

impl ItemCategory {
    /// Returns the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Rod => "Fishing Rod",
            ItemCategory::Helmet => "Helmet",
            ItemCategory::Chestplate => "Chestplate",
            ItemCategory::Leggings => "Leggings",
            ItemCategory::Boots => "Boots",
            ItemCategory::Pet => "Pet",
            ItemCategory::Accessory => "Accessory",
            ItemCategory::Equipment => "Equipment",
            ItemCategory::Bait => "Bait",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
    Divine,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
            Rarity::Divine => "Divine",
        }
    }
}

/// A catalog item with its per-stat contributions.
///
/// Retired items stay in the catalog with `active` cleared so old
/// snapshots and rankings remain reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub category: ItemCategory,
    pub rarity: Rarity,
    /// Stat key (e.g. "scc", "fs") to contribution.
    pub stats: BTreeMap<String, f64>,
    pub active: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, category: ItemCategory, rarity: Rarity) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            rarity,
            stats: BTreeMap::new(),
            active: true,
        }
    }

    /// Adds a stat contribution, builder style.
    pub fn with_stat(mut self, stat: impl Into<String>, value: f64) -> Self {
        self.stats.insert(stat.into(), value);
        self
    }

    /// This item's contribution to `stat`, 0 when it has none.
    pub fn stat(&self, stat: &str) -> f64 {
        self.stats.get(stat).copied().unwrap_or(0.0)
    }
}

/// Optional flat and multiplicative modifiers for one stat.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SetBonusMods {
    pub flat: Option<f64>,
    pub multiplier: Option<f64>,
}

/// Set bonus map keyed `{stat}_flat` / `{stat}_multiplier`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetBonuses(pub BTreeMap<String, f64>);

impl SetBonuses {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The modifiers this bonus map carries for `stat`.
    pub fn mods_for(&self, stat: &str) -> SetBonusMods {
        SetBonusMods {
            flat: self.0.get(&format!("{stat}_flat")).copied(),
            multiplier: self.0.get(&format!("{stat}_multiplier")).copied(),
        }
    }
}

/// A complete loadout: pieces plus the bonus unlocked by the full set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearSet {
    pub name: String,
    pub pieces: Vec<Item>,
    pub set_bonuses: SetBonuses,
}

impl GearSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pieces: Vec::new(),
            set_bonuses: SetBonuses::default(),
        }
    }
}
