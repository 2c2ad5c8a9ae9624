//! Advisory messages derived from level and trophy progress.
//!
//! A fixed rule ladder evaluated top to bottom; every matching rule
//! appends its message, so output order is stable for a given input.

use super::trophy::TrophyBreakdown;

/// Builds the recommendation list for a profile.
///
/// `xp` is part of the calculator contract but the current ladder keys
/// off level and trophy progress only.
pub fn recommendations(level: u32, _xp: f64, trophy: &TrophyBreakdown) -> Vec<String> {
    let mut out = Vec::new();

    // Level ladder
    if level < 25 {
        out.push("🎣 Focus on leveling fishing to unlock better loot pools".to_string());
    } else if level < 30 {
        out.push("🏆 Start trophy fishing in the Crimson Isle for better loot".to_string());
    }

    if level >= 26 {
        out.push("✅ You can fish for Great White Sharks and Thunder".to_string());
    }

    if level >= 40 {
        out.push("🌊 High fishing level! You have access to all sea creatures".to_string());
    }

    // Trophy fish ladder
    let total_trophy = trophy.total_caught;
    if total_trophy == 0 {
        out.push(
            "🐠 Start trophy fishing to improve your Fishing Speed and earn rewards!".to_string(),
        );
    } else if total_trophy < 100 {
        out.push("🐠 Catch more trophy fish to increase your Fishing Speed".to_string());
    } else if total_trophy < 1000 {
        out.push("💎 Focus on catching diamond trophy fish for better rewards".to_string());
    } else {
        out.push(format!(
            "🌟 Impressive! You've caught {} trophy fish!",
            total_trophy
        ));
    }

    // Diamond tier ladder
    let diamond_count = trophy.by_tier.diamond;
    if diamond_count == 0 && total_trophy > 0 {
        out.push("💎 Try to catch your first diamond trophy fish!".to_string());
    } else if diamond_count < 10 {
        out.push(format!(
            "💎 You need more diamond trophy fish (current: {})",
            diamond_count
        ));
    } else if diamond_count < 50 {
        out.push(format!(
            "💎 Good progress on diamond trophies! ({}/50)",
            diamond_count
        ));
    } else {
        out.push(format!(
            "🌟 Outstanding! You have {} diamond trophy fish",
            diamond_count
        ));
    }

    out
}
