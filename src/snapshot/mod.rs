//! Immutable profile snapshots.
//!
//! Every observation of a profile becomes a new record storing the raw
//! payload verbatim (for replay against future extractor versions)
//! alongside the stats derived at capture time. Records are never
//! mutated; history only grows.

use crate::profile::types::FishingStats;
use crate::stats::types::DerivedStats;
use crate::utils::persistence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub id: Uuid,
    pub player_uuid: Uuid,
    pub ign: String,
    pub profile_id: Option<String>,
    pub cute_name: Option<String>,
    pub fishing_level: u32,
    /// Full upstream profile payload, stored verbatim.
    pub raw_profile: Value,
    pub derived: DerivedStats,
    pub created_at: DateTime<Utc>,
}

impl ProfileSnapshot {
    /// Captures a snapshot of one extracted profile, stamped now.
    pub fn capture(
        player_uuid: Uuid,
        ign: impl Into<String>,
        raw_profile: Value,
        stats: &FishingStats,
        derived: DerivedStats,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_uuid,
            ign: ign.into(),
            profile_id: stats.profile_id.clone(),
            cute_name: stats.cute_name.clone(),
            fishing_level: stats.fishing_level,
            raw_profile,
            derived,
            created_at: Utc::now(),
        }
    }
}

/// Append-only snapshot store, one JSON file per player.
pub struct SnapshotStore;

impl SnapshotStore {
    fn filename(player_uuid: &Uuid) -> String {
        format!("snapshots_{}.json", player_uuid.simple())
    }

    /// Appends a snapshot to the player's history.
    pub fn record(snapshot: &ProfileSnapshot) -> io::Result<()> {
        let filename = Self::filename(&snapshot.player_uuid);
        let mut history: Vec<ProfileSnapshot> = persistence::load_json_or_default(&filename);
        history.push(snapshot.clone());
        persistence::save_json(&filename, &history)?;
        debug!(player = %snapshot.player_uuid, total = history.len(), "recorded snapshot");
        Ok(())
    }

    /// The player's snapshot history, newest first. Empty if none.
    pub fn history(player_uuid: &Uuid) -> Vec<ProfileSnapshot> {
        let mut history: Vec<ProfileSnapshot> =
            persistence::load_json_or_default(&Self::filename(player_uuid));
        history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        history
    }
}
