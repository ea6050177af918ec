//! XP application and level-up resolution for the power-law model.
//!
//! The faction model never goes through a resolver: faction level is always
//! recomputed fresh from cumulative totals. Skills and the character track a
//! per-level remainder instead, so applying a gain may complete one or more
//! level thresholds that must be consumed here.
//!
//! [`add_xp`] is a pure function over values. Reading current state, calling
//! it, and writing the result back is the caller's read-modify-write
//! sequence; atomicity over concurrent gains to the same entity belongs to
//! the storage layer, not here.

use crate::model::xp_for_level;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of applying an XP gain to a skill or character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpApplication {
    /// Level after the gain was resolved.
    pub new_level: u32,
    /// Remainder XP into `new_level`, always in `[0, xp_for_level(new_level + 1))`.
    pub new_xp: i64,
    /// Whether at least one level was gained.
    pub leveled_up: bool,
    /// How many levels were gained (a large bonus can jump several at once).
    pub levels_gained: u32,
}

/// Apply an XP gain to `(current_level, current_xp)` state.
///
/// Resolves arbitrarily many level-ups in one call: the loop keeps consuming
/// the next level's cost for as long as the remainder can afford it. Negative
/// gains (streak-break penalties) reduce the remainder but never level down;
/// the remainder floors at 0 within the current level.
///
/// Does not mutate any stored record; callers persist the returned state.
pub fn add_xp(current_level: u32, current_xp: i64, xp_gained: i64) -> XpApplication {
    let mut new_xp = current_xp.saturating_add(xp_gained);
    let mut new_level = current_level;
    let mut levels_gained = 0u32;

    while new_xp >= xp_for_level(new_level + 1) {
        new_xp -= xp_for_level(new_level + 1);
        new_level += 1;
        levels_gained += 1;
    }

    // Penalty floor: losses stop at the current level's baseline.
    if new_xp < 0 {
        new_xp = 0;
    }

    if levels_gained > 0 {
        debug!(
            current_level,
            new_level, levels_gained, "xp gain resolved level-ups"
        );
    }

    XpApplication {
        new_level,
        new_xp,
        leveled_up: levels_gained > 0,
        levels_gained,
    }
}
