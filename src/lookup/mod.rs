//! One-call player lookup pipeline.
//!
//! Resolve the name, fetch every profile, then extract and derive per
//! profile. Extraction and derivation are pure and share no state, so
//! profiles fan out across threads.

use crate::hypixel::{ApiError, CancelToken, HypixelClient};
use crate::profile::extract::{extract, KillFilter};
use crate::profile::types::FishingStats;
use crate::stats::types::{derive_stats, DerivedStats};
use rayon::prelude::*;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

/// Stats for a single profile, with the raw payload kept for
/// snapshotting.
#[derive(Debug, Clone)]
pub struct ProfileStats {
    pub stats: FishingStats,
    pub derived: DerivedStats,
    pub raw: Value,
}

/// All profiles for one player, most recently played first.
#[derive(Debug, Clone)]
pub struct PlayerReport {
    pub ign: String,
    pub uuid: Uuid,
    pub profiles: Vec<ProfileStats>,
}

/// Runs the full lookup pipeline for a player name.
pub fn lookup_player(
    client: &HypixelClient,
    ign: &str,
    kills: KillFilter,
    cancel: &CancelToken,
) -> Result<PlayerReport, ApiError> {
    let uuid = client.resolve_uuid(ign, cancel)?;
    let raw_profiles = client.fetch_profiles(&uuid, cancel)?;
    info!(ign, %uuid, profiles = raw_profiles.len(), "extracting profiles");

    let mut profiles: Vec<ProfileStats> = raw_profiles
        .into_par_iter()
        .map(|raw| {
            let stats = extract(&raw, &uuid, kills);
            let derived = derive_stats(&stats);
            ProfileStats {
                stats,
                derived,
                raw,
            }
        })
        .collect();
    profiles.sort_by(|a, b| b.stats.last_save.cmp(&a.stats.last_save));

    Ok(PlayerReport {
        ign: ign.to_string(),
        uuid,
        profiles,
    })
}
