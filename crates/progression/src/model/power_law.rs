//! Power-law progression model used by skills and the overall character.
//!
//! Each level costs `floor(100 * level^1.5)` XP. Unlike the faction model,
//! state is tracked as `(level, remainder XP)`: completed level thresholds
//! are consumed and only the remainder is kept, so `current_xp` must always
//! stay below the next level's cost (see the resolver).

use super::traits::ProgressionModel;

/// XP required to advance *through* `level`: `floor(100 * level^1.5)`.
///
/// Returns 0 for level 0. `level^1.5` is computed as `sqrt(level^3)` so that
/// exact squares floor cleanly and the round-trip law in [`level_from_xp`]
/// holds at threshold boundaries.
pub fn xp_for_level(level: u32) -> i64 {
    if level == 0 {
        return 0;
    }
    let l = f64::from(level);
    (100.0 * (l * l * l).sqrt()).floor() as i64
}

/// Cumulative XP required to reach `level` from zero: the sum of
/// [`xp_for_level`] for levels 1 through `level` inclusive.
///
/// Used where the model tracks lifetime cumulative XP rather than a
/// per-level remainder (e.g., overall character level).
pub fn total_xp_for_level(level: u32) -> i64 {
    (1..=level).map(xp_for_level).sum()
}

/// Derive a level from lifetime cumulative XP.
///
/// Greedily consumes per-level costs starting at level 1 until the remaining
/// total can no longer afford the next level. Returns the highest fully-paid
/// level, minimum 1. Round-trip law: `level_from_xp(total_xp_for_level(l))
/// == l` for `l >= 1`.
pub fn level_from_xp(total_xp: i64) -> u32 {
    let mut remaining = total_xp;
    let mut level = 0u32;
    loop {
        let cost = xp_for_level(level + 1);
        if remaining < cost {
            break;
        }
        remaining -= cost;
        level += 1;
    }
    level.max(1)
}

/// Percentage progress toward the next level from a per-level remainder.
///
/// Clamped to `[0, 100]`; returns 100 if the next level's requirement is 0.
pub fn progress_to_next_level(level: u32, current_xp_in_level: i64) -> f64 {
    let required = xp_for_level(level + 1);
    if required == 0 {
        return 100.0;
    }
    ((current_xp_in_level as f64 / required as f64) * 100.0).clamp(0.0, 100.0)
}

/// Power-law progression strategy for skill and character entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerLawProgression;

impl PowerLawProgression {
    /// Create a new power-law model instance.
    pub fn new() -> Self {
        Self
    }
}

impl ProgressionModel for PowerLawProgression {
    fn model_id(&self) -> &str {
        "power_law"
    }

    fn display_name(&self) -> &str {
        "Power law (skills and character)"
    }

    fn xp_for_level(&self, level: u32) -> i64 {
        xp_for_level(level)
    }

    fn level_from_xp(&self, total_xp: i64) -> u32 {
        level_from_xp(total_xp)
    }

    fn progress_percent(&self, total_xp: i64) -> u32 {
        let level = level_from_xp(total_xp);
        let remainder = (total_xp - total_xp_for_level(level)).max(0);
        let pct = progress_to_next_level(level, remainder).round() as i64;
        pct.clamp(0, 100) as u32
    }
}
