//! Sea creature kill statistics from the bestiary map.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Creatures worth calling out on a fishing profile, with display names.
const NOTABLE_CREATURES: &[(&str, &str)] = &[
    ("water_hydra", "Water Hydra"),
    ("the_sea_emperor", "Sea Emperor"),
    ("thunder", "Thunder"),
    ("lord_jawbus", "Lord Jawbus"),
    ("great_white_shark", "Great White Shark"),
    ("yeti", "Yeti"),
];

/// Sea creature kill statistics for one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeaCreatureBreakdown {
    pub total_kills: u64,
    pub unique_types: usize,
    /// Curated subset keyed by display name, present only when the
    /// creature appears in the input.
    pub notable: BTreeMap<String, u64>,
}

/// Sums bestiary kills, counting only entries with numeric values.
pub fn sea_creature_breakdown(kills: &BTreeMap<String, Value>) -> SeaCreatureBreakdown {
    let mut stats = SeaCreatureBreakdown::default();

    let mut numeric: BTreeMap<&str, u64> = BTreeMap::new();
    for (creature_id, value) in kills {
        if let Some(count) = value.as_f64().filter(|n| n.is_finite() && *n >= 0.0) {
            numeric.insert(creature_id.as_str(), count as u64);
        }
    }

    stats.total_kills = numeric.values().sum();
    stats.unique_types = numeric.len();

    for (creature_id, display_name) in NOTABLE_CREATURES {
        if let Some(count) = numeric.get(creature_id) {
            stats.notable.insert(display_name.to_string(), *count);
        }
    }

    stats
}
