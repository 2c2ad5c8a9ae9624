//! Derived stats assembled from a `FishingStats` snapshot.

use super::recommend::recommendations;
use super::sea_creatures::{sea_creature_breakdown, SeaCreatureBreakdown};
use super::trophy::{trophy_breakdown, TrophyBreakdown};
use crate::profile::types::FishingStats;
use serde::{Deserialize, Serialize};

/// Everything computed on demand from one normalized snapshot.
/// Immutable once returned; snapshots persist it verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub trophy_fish: TrophyBreakdown,
    pub sea_creatures: SeaCreatureBreakdown,
    pub recommendations: Vec<String>,
}

/// Computes the full derived-stats bundle for one profile.
pub fn derive_stats(stats: &FishingStats) -> DerivedStats {
    let trophy_fish = trophy_breakdown(&stats.trophy_fish);
    let sea_creatures = sea_creature_breakdown(&stats.sea_creature_kills);
    let recommendations = recommendations(stats.fishing_level, stats.fishing_xp, &trophy_fish);

    DerivedStats {
        trophy_fish,
        sea_creatures,
        recommendations,
    }
}
