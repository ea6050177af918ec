//! Cross-faction derived stats consumed by dashboards.

use crate::value_objects::{Faction, FactionProgress};

/// Minimum level every faction must reach for the balance bonus.
pub const BALANCE_BONUS_MIN_LEVEL: u32 = 3;

/// Balance bonus eligibility: true iff every one of the six factions has
/// reached [`BALANCE_BONUS_MIN_LEVEL`].
///
/// No partial credit: a missing record counts as not reaching the bar.
pub fn has_balance_bonus(factions: &[FactionProgress]) -> bool {
    Faction::all().iter().all(|faction| {
        factions
            .iter()
            .any(|p| p.faction == *faction && p.level() >= BALANCE_BONUS_MIN_LEVEL)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_factions_at(total_xp: i64) -> Vec<FactionProgress> {
        Faction::all()
            .iter()
            .map(|faction| {
                FactionProgress::with_total_xp(*faction, total_xp).expect("non-negative")
            })
            .collect()
    }

    #[test]
    fn all_factions_at_level_three_qualify() {
        // 900 XP is exactly level 3
        assert!(has_balance_bonus(&all_factions_at(900)));
    }

    #[test]
    fn one_lagging_faction_disqualifies() {
        let mut factions = all_factions_at(900);
        factions[3].total_xp = 899;
        assert!(!has_balance_bonus(&factions));
    }

    #[test]
    fn missing_record_disqualifies() {
        let mut factions = all_factions_at(5000);
        factions.pop();
        assert!(!has_balance_bonus(&factions));
    }

    #[test]
    fn empty_set_never_qualifies() {
        assert!(!has_balance_bonus(&[]));
    }
}
