//! Stat arithmetic for gear loadouts.
//!
//! Every derived fishing stat (Sea Creature Chance, Fishing Speed, ...)
//! uses the same formula; only the contributions feeding the sum differ:
//!
//! ```text
//! total = (sum(contributions) + flat) * multiplier
//! ```
//!
//! The set bonus is applied exactly once, after all flat contributions
//! are summed. Results round half-away-from-zero to 2 decimals
//! (`f64::round` semantics), the same for every stat.

use super::types::{GearSet, SetBonusMods, STAT_FS, STAT_SCC};

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Combines per-source stat contributions with an optional set bonus.
///
/// Absent modifiers are the identity (`flat` 0, `multiplier` 1), so an
/// empty bonus is a no-op and `combine(&[], ..)` is 0.0.
pub fn combine(contributions: &[f64], bonuses: &SetBonusMods) -> f64 {
    let total: f64 = contributions.iter().sum();
    let total = (total + bonuses.flat.unwrap_or(0.0)) * bonuses.multiplier.unwrap_or(1.0);
    round2(total)
}

impl GearSet {
    /// Total for `stat` over the set's active pieces plus its own bonus.
    pub fn stat_total(&self, stat: &str) -> f64 {
        let contributions: Vec<f64> = self
            .pieces
            .iter()
            .filter(|item| item.active)
            .map(|item| item.stat(stat))
            .collect();
        combine(&contributions, &self.set_bonuses.mods_for(stat))
    }

    /// Total Sea Creature Chance for this set.
    pub fn sea_creature_chance(&self) -> f64 {
        self.stat_total(STAT_SCC)
    }

    /// Total Fishing Speed for this set.
    pub fn fishing_speed(&self) -> f64 {
        self.stat_total(STAT_FS)
    }
}

/// Scores each set on `stat` and returns (name, score) pairs, best
/// first. Ties break by name so the order is stable.
pub fn rank_sets<'a>(sets: &'a [GearSet], stat: &str) -> Vec<(&'a str, f64)> {
    let mut ranked: Vec<(&str, f64)> = sets
        .iter()
        .map(|set| (set.name.as_str(), set.stat_total(stat)))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::types::{Item, ItemCategory, Rarity, SetBonuses};
    use std::collections::BTreeMap;

    fn mods(flat: Option<f64>, multiplier: Option<f64>) -> SetBonusMods {
        SetBonusMods { flat, multiplier }
    }

    #[test]
    fn test_combine_empty_is_zero() {
        assert_eq!(combine(&[], &SetBonusMods::default()), 0.0);
    }

    #[test]
    fn test_combine_sum_only() {
        // 4 + 10 + 5 + 0 + 3 + 2 = 24
        let result = combine(&[4.0, 10.0, 5.0, 0.0, 3.0, 2.0], &SetBonusMods::default());
        assert_eq!(result, 24.0);
    }

    #[test]
    fn test_combine_with_multiplier() {
        // (10 + 10) * 1.1 = 22
        assert_eq!(combine(&[10.0, 10.0], &mods(None, Some(1.1))), 22.0);
    }

    #[test]
    fn test_combine_with_flat_bonus() {
        // (40 + 10) = 50
        assert_eq!(combine(&[40.0], &mods(Some(10.0), None)), 50.0);
    }

    #[test]
    fn test_combine_flat_then_multiplier() {
        // ((10 + 5) + 5) * 1.2 = 24
        assert_eq!(combine(&[10.0, 5.0], &mods(Some(5.0), Some(1.2))), 24.0);
    }

    #[test]
    fn test_combine_rounds_to_two_decimals() {
        // 3 * 1.333 = 3.999 -> 4.0
        assert_eq!(combine(&[3.0], &mods(None, Some(1.333))), 4.0);
        // 10 * 1.0556 = 10.556 -> 10.56
        assert_eq!(combine(&[10.0], &mods(None, Some(1.0556))), 10.56);
    }

    #[test]
    fn test_round2_symmetric_about_zero() {
        assert_eq!(round2(2.006), 2.01);
        assert_eq!(round2(-2.006), -2.01);
        assert_eq!(round2(2.004), 2.0);
        assert_eq!(round2(1.0 / 3.0), 0.33);
    }

    fn fishing_set() -> GearSet {
        let mut bonuses = BTreeMap::new();
        bonuses.insert("scc_flat".to_string(), 5.0);
        bonuses.insert("scc_multiplier".to_string(), 1.2);

        GearSet {
            name: "Shark Hunter".to_string(),
            pieces: vec![
                Item::new("Rod of the Sea", ItemCategory::Rod, Rarity::Legendary)
                    .with_stat("scc", 10.0)
                    .with_stat("fs", 20.0),
                Item::new("Shark Helmet", ItemCategory::Helmet, Rarity::Epic)
                    .with_stat("scc", 5.0),
            ],
            set_bonuses: SetBonuses(bonuses),
        }
    }

    #[test]
    fn test_gear_set_stat_total() {
        let set = fishing_set();
        // ((10 + 5) + 5_flat) * 1.2 = 24
        assert_eq!(set.sea_creature_chance(), 24.0);
        // fs has no bonuses: 20 + 0 = 20
        assert_eq!(set.fishing_speed(), 20.0);
    }

    #[test]
    fn test_gear_set_bonus_applied_once() {
        // Applying stat_total twice must not compound the bonus.
        let set = fishing_set();
        assert_eq!(set.sea_creature_chance(), set.sea_creature_chance());
    }

    #[test]
    fn test_inactive_pieces_excluded() {
        let mut set = fishing_set();
        set.pieces[1].active = false;
        // ((10 + 0) + 5_flat) * 1.2 = 18
        assert_eq!(set.sea_creature_chance(), 18.0);
    }

    #[test]
    fn test_empty_set_scores_bonus_only() {
        let set = GearSet::new("Empty");
        assert_eq!(set.sea_creature_chance(), 0.0);
        assert_eq!(set.fishing_speed(), 0.0);
    }

    #[test]
    fn test_rank_sets_orders_descending() {
        let weak = GearSet {
            name: "Starter".to_string(),
            pieces: vec![
                Item::new("Fishing Rod", ItemCategory::Rod, Rarity::Common).with_stat("scc", 1.0),
            ],
            set_bonuses: SetBonuses::default(),
        };
        let strong = fishing_set();

        let sets = [weak, strong];
        let ranked = rank_sets(&sets, "scc");
        assert_eq!(ranked[0], ("Shark Hunter", 24.0));
        assert_eq!(ranked[1], ("Starter", 1.0));
    }

    #[test]
    fn test_rank_sets_ties_break_by_name() {
        let a = GearSet::new("Alpha");
        let b = GearSet::new("Beta");
        let sets = [b, a];
        let ranked = rank_sets(&sets, "scc");
        assert_eq!(ranked[0].0, "Alpha");
        assert_eq!(ranked[1].0, "Beta");
    }
}
