//! Normalized fishing statistics extracted from a Skyblock profile.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Fishing stats for one profile member, normalized across the schema
/// variants the upstream API has shipped over the years.
///
/// `fishing_level` is always derived from `fishing_xp` at extraction
/// time; the two never disagree. Map fields keep the raw upstream
/// values (junk entries included, the stats calculator filters them),
/// ordered for deterministic output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishingStats {
    pub fishing_level: u32,
    pub fishing_xp: f64,
    pub trophy_fish: BTreeMap<String, Value>,
    pub sea_creature_kills: BTreeMap<String, Value>,
    /// Equipment inventory blob, passed through undecoded.
    pub equipment: Option<Value>,
    /// Wardrobe inventory blob, passed through undecoded.
    pub wardrobe: Option<Value>,
    pub profile_id: Option<String>,
    pub cute_name: Option<String>,
    /// Epoch milliseconds of the member's last save; 0 when absent.
    pub last_save: u64,
}
