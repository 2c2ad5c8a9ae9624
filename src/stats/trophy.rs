//! Trophy fish breakdown.
//!
//! Trophy fish arrive as a flat count map keyed `<fish_name>_<tier>`
//! (e.g. `"sulphur_skitter_bronze"`), mixed in with bookkeeping entries
//! like `rewards` or `last_caught`. Anything that does not parse as a
//! tiered numeric count is skipped.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The four trophy fish quality tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrophyTier {
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl TrophyTier {
    pub const ALL: [TrophyTier; 4] = [
        TrophyTier::Bronze,
        TrophyTier::Silver,
        TrophyTier::Gold,
        TrophyTier::Diamond,
    ];

    /// Returns the display name for this tier.
    pub fn name(&self) -> &'static str {
        match self {
            TrophyTier::Bronze => "Bronze",
            TrophyTier::Silver => "Silver",
            TrophyTier::Gold => "Gold",
            TrophyTier::Diamond => "Diamond",
        }
    }

    fn from_key_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "bronze" => Some(TrophyTier::Bronze),
            "silver" => Some(TrophyTier::Silver),
            "gold" => Some(TrophyTier::Gold),
            "diamond" => Some(TrophyTier::Diamond),
            _ => None,
        }
    }
}

/// Catch counts accumulated per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub bronze: u64,
    pub silver: u64,
    pub gold: u64,
    pub diamond: u64,
}

impl TierCounts {
    pub fn get(&self, tier: TrophyTier) -> u64 {
        match tier {
            TrophyTier::Bronze => self.bronze,
            TrophyTier::Silver => self.silver,
            TrophyTier::Gold => self.gold,
            TrophyTier::Diamond => self.diamond,
        }
    }

    fn add(&mut self, tier: TrophyTier, count: u64) {
        match tier {
            TrophyTier::Bronze => self.bronze += count,
            TrophyTier::Silver => self.silver += count,
            TrophyTier::Gold => self.gold += count,
            TrophyTier::Diamond => self.diamond += count,
        }
    }
}

/// Per-fish tally with its own tier split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishTally {
    pub total: u64,
    pub tiers: BTreeMap<TrophyTier, u64>,
}

/// Trophy fish statistics for one profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrophyBreakdown {
    pub total_caught: u64,
    pub by_tier: TierCounts,
    pub by_fish: BTreeMap<String, FishTally>,
}

/// Breaks a raw trophy fish count map down by tier and by fish name.
///
/// Keys split on the LAST underscore into fish name and tier; entries
/// with an unknown tier or a non-numeric count are silently skipped.
pub fn trophy_breakdown(counts: &BTreeMap<String, Value>) -> TrophyBreakdown {
    let mut stats = TrophyBreakdown::default();

    for (key, value) in counts {
        let count = match numeric_count(value) {
            Some(n) => n,
            None => continue,
        };
        let (fish_name, suffix) = match key.rsplit_once('_') {
            Some(parts) => parts,
            None => continue,
        };
        let tier = match TrophyTier::from_key_suffix(suffix) {
            Some(t) => t,
            None => continue,
        };

        stats.total_caught += count;
        stats.by_tier.add(tier, count);

        let tally = stats.by_fish.entry(fish_name.to_string()).or_default();
        tally.total += count;
        *tally.tiers.entry(tier).or_insert(0) += count;
    }

    stats
}

fn numeric_count(value: &Value) -> Option<u64> {
    let n = value.as_f64()?;
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    Some(n as u64)
}
