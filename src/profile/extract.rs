//! Schema-tolerant extraction of fishing stats from raw profile JSON.
//!
//! The upstream profile payload is untrusted and has shipped several
//! schema variants; missing keys, nulls, and wrong types are normal
//! here, not errors. Extraction is total: any absent or malformed field
//! falls back to a zero/empty default.

use super::level::level_for_xp;
use super::types::FishingStats;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// Which bestiary kills to keep when extracting.
///
/// Older builds of the tracker surfaced the full bestiary, newer ones
/// only marine creatures; both behaviors stay available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KillFilter {
    /// Pass through every bestiary entry.
    #[default]
    All,
    /// Keep only entries whose key matches a known marine creature.
    FishingOnly,
}

/// Substrings identifying marine creatures in bestiary keys. The
/// upstream data does not tag entries by habitat, so the fishing-only
/// view is a key match.
const MARINE_KEY_HINTS: &[&str] = &[
    "sea_",
    "squid",
    "shark",
    "jellyfish",
    "hydra",
    "emperor",
    "thunder",
    "jawbus",
    "yeti",
    "whale",
    "nurse",
    "moogma",
    "flaming_worm",
    "lava",
    "water_worm",
    "catfish",
    "carrot_king",
    "water_slime",
    "oasis",
    "poisoned_water",
    "abyssal",
    "deep_sea",
    "frozen_steve",
    "frosty",
    "grinch",
    "reindrake",
];

/// Ordered fishing-XP sources, newest schema first. A source "hits"
/// only if the full path down to the value yields a number; an
/// intermediate object being present does not shadow later sources.
const XP_SOURCES: [fn(&Value) -> Option<f64>; 3] =
    [xp_from_player_data, xp_from_leveling, xp_from_legacy_flat];

/// `player_data.experience.SKILL_FISHING`, authoritative in the v2 schema.
fn xp_from_player_data(member: &Value) -> Option<f64> {
    member
        .get("player_data")?
        .get("experience")?
        .get("SKILL_FISHING")?
        .as_f64()
}

/// `leveling.experience.SKILL_FISHING`, secondary v2 location.
fn xp_from_leveling(member: &Value) -> Option<f64> {
    member
        .get("leveling")?
        .get("experience")?
        .get("SKILL_FISHING")?
        .as_f64()
}

/// `experience_skill_fishing`, the flat key on pre-v2 profiles.
fn xp_from_legacy_flat(member: &Value) -> Option<f64> {
    member.get("experience_skill_fishing")?.as_f64()
}

/// Inventory blob locations, current nesting first, then the flat keys
/// old profiles used. "equippment" is the upstream API's own spelling.
const EQUIPMENT_PATHS: [fn(&Value) -> Option<&Value>; 2] =
    [equipment_from_inventory, equipment_from_legacy_flat];

const WARDROBE_PATHS: [fn(&Value) -> Option<&Value>; 2] =
    [wardrobe_from_inventory, wardrobe_from_legacy_flat];

fn equipment_from_inventory(member: &Value) -> Option<&Value> {
    member.get("inventory")?.get("equippment_contents")
}

fn equipment_from_legacy_flat(member: &Value) -> Option<&Value> {
    member.get("equippment_contents")
}

fn wardrobe_from_inventory(member: &Value) -> Option<&Value> {
    member.get("inventory")?.get("wardrobe_contents")
}

fn wardrobe_from_legacy_flat(member: &Value) -> Option<&Value> {
    member.get("wardrobe_contents")
}

/// Extracts normalized fishing stats for `player_uuid` from a raw
/// profile payload. Never fails; see module docs.
pub fn extract(profile: &Value, player_uuid: &Uuid, kills: KillFilter) -> FishingStats {
    let member_key = player_uuid.simple().to_string();
    let empty = Value::Object(serde_json::Map::new());
    let member = profile
        .get("members")
        .and_then(|m| m.get(&member_key))
        .unwrap_or(&empty);
    if member.as_object().map(|o| o.is_empty()).unwrap_or(true) {
        debug!(%player_uuid, "profile has no member data for player");
    }

    let fishing_xp = XP_SOURCES
        .iter()
        .find_map(|source| source(member))
        .unwrap_or(0.0)
        .max(0.0);

    let trophy_fish = object_entries(member.get("trophy_fish"));

    let mut sea_creature_kills =
        object_entries(member.get("bestiary").and_then(|b| b.get("kills")));
    if kills == KillFilter::FishingOnly {
        sea_creature_kills.retain(|key, _| is_marine_key(key));
    }

    FishingStats {
        fishing_level: level_for_xp(fishing_xp),
        fishing_xp,
        trophy_fish,
        sea_creature_kills,
        equipment: EQUIPMENT_PATHS.iter().find_map(|p| p(member)).cloned(),
        wardrobe: WARDROBE_PATHS.iter().find_map(|p| p(member)).cloned(),
        profile_id: string_field(profile, "profile_id"),
        cute_name: string_field(profile, "cute_name"),
        last_save: member
            .get("last_save")
            .and_then(Value::as_u64)
            .unwrap_or(0),
    }
}

fn is_marine_key(key: &str) -> bool {
    MARINE_KEY_HINTS.iter().any(|hint| key.contains(hint))
}

fn object_entries(value: Option<&Value>) -> BTreeMap<String, Value> {
    value
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default()
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}
