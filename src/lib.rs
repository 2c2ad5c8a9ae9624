//! Skyskills - Hypixel Skyblock fishing stats tracker.
//!
//! Fetches player profiles from the upstream API, normalizes the
//! loosely-versioned payloads into fishing stats, derives trophy and
//! bestiary breakdowns with recommendations, scores gear loadouts, and
//! records immutable snapshots.

pub mod gear;
pub mod hypixel;
pub mod lookup;
pub mod profile;
pub mod snapshot;
pub mod stats;
pub mod utils;
