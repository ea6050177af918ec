//! Progress records for factions and skills.
//!
//! Faction level is strictly a computed projection of cumulative XP; only the
//! XP totals are state. Skill progress keeps the `(level, remainder)` pair of
//! the power-law model, with the remainder invariant enforced at construction
//! and preserved by the resolver.

use crate::error::DomainError;
use crate::ids::SkillId;
use crate::value_objects::Faction;
use projektl_progression::{
    add_xp, calculate_faction_level, faction_level_progress, progress_to_next_level,
    xp_for_faction_level, xp_for_level, XpApplication,
};
use serde::{Deserialize, Serialize};

/// Per-faction XP record. One per faction per user, created at zero when the
/// profile is initialized.
///
/// `level` is never stored: it is always derived from `total_xp`, so the two
/// can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionProgress {
    /// Which life-domain this record tracks.
    pub faction: Faction,
    /// Lifetime XP. Non-negative at rest; penalties clamp at zero.
    pub total_xp: i64,
    /// XP earned in the current week. Reset externally on a schedule.
    pub weekly_xp: i64,
    /// XP earned in the current month. Reset externally on a schedule.
    pub monthly_xp: i64,
}

impl FactionProgress {
    /// Fresh record at zero XP.
    pub fn new(faction: Faction) -> Self {
        Self {
            faction,
            total_xp: 0,
            weekly_xp: 0,
            monthly_xp: 0,
        }
    }

    /// Rebuild a record from an externally stored total.
    pub fn with_total_xp(faction: Faction, total_xp: i64) -> Result<Self, DomainError> {
        if total_xp < 0 {
            return Err(DomainError::constraint(format!(
                "faction total_xp must be non-negative, got {total_xp}"
            )));
        }
        Ok(Self {
            faction,
            total_xp,
            weekly_xp: 0,
            monthly_xp: 0,
        })
    }

    /// Current level, derived from `total_xp`. Always at least 1.
    pub fn level(&self) -> u32 {
        calculate_faction_level(self.total_xp)
    }

    /// Percentage progress toward the next level, in `[0, 100]`.
    pub fn progress_percent(&self) -> u32 {
        faction_level_progress(self.total_xp)
    }

    /// XP still missing until the next level's threshold.
    pub fn xp_to_next_level(&self) -> i64 {
        (xp_for_faction_level(self.level() + 1) - self.total_xp).max(0)
    }

    /// Record an XP gain (or penalty, when `amount` is negative).
    ///
    /// The lifetime total floors at zero; the rolling weekly/monthly windows
    /// take the delta as-is and may go negative within a window.
    pub fn record_gain(&mut self, amount: i64) {
        self.total_xp = self.total_xp.saturating_add(amount).max(0);
        self.weekly_xp = self.weekly_xp.saturating_add(amount);
        self.monthly_xp = self.monthly_xp.saturating_add(amount);
    }

    /// Zero the weekly window. Called by the external scheduler.
    pub fn reset_weekly(&mut self) {
        self.weekly_xp = 0;
    }

    /// Zero the monthly window. Called by the external scheduler.
    pub fn reset_monthly(&mut self) {
        self.monthly_xp = 0;
    }
}

/// Per-skill progression under the power-law model.
///
/// Invariant: `current_xp` is the remainder after consuming all completed
/// level thresholds, so `0 <= current_xp < xp_for_level(level + 1)` always
/// holds. A value at or above the next threshold would mean an unresolved
/// level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProgress {
    /// Which skill this record tracks.
    pub skill_id: SkillId,
    /// Current level, at least 1.
    pub level: u32,
    /// Remainder XP into the current level.
    pub current_xp: i64,
}

impl SkillProgress {
    /// Fresh record at level 1 with zero XP, for a newly assigned skill.
    pub fn new(skill_id: SkillId) -> Self {
        Self {
            skill_id,
            level: 1,
            current_xp: 0,
        }
    }

    /// Rebuild a record from externally stored parts, enforcing the
    /// remainder invariant.
    pub fn from_parts(skill_id: SkillId, level: u32, current_xp: i64) -> Result<Self, DomainError> {
        if level == 0 {
            return Err(DomainError::validation("skill level must be at least 1"));
        }
        if current_xp < 0 {
            return Err(DomainError::constraint(format!(
                "skill current_xp must be non-negative, got {current_xp}"
            )));
        }
        if current_xp >= xp_for_level(level + 1) {
            return Err(DomainError::constraint(format!(
                "unresolved level-up: {current_xp} XP at level {level} meets the next threshold"
            )));
        }
        Ok(Self {
            skill_id,
            level,
            current_xp,
        })
    }

    /// Apply an XP gain through the resolver and adopt the result.
    ///
    /// Returns the resolution so callers can trigger level-up feedback.
    pub fn gain(&mut self, amount: i64) -> XpApplication {
        let outcome = add_xp(self.level, self.current_xp, amount);
        self.apply(outcome);
        outcome
    }

    /// Adopt a resolver outcome computed elsewhere.
    pub fn apply(&mut self, outcome: XpApplication) {
        self.level = outcome.new_level;
        self.current_xp = outcome.new_xp;
    }

    /// Percentage progress toward the next level, in `[0, 100]`.
    pub fn progress_percent(&self) -> f64 {
        progress_to_next_level(self.level, self.current_xp)
    }

    /// XP still missing until the next level.
    pub fn xp_to_next_level(&self) -> i64 {
        (xp_for_level(self.level + 1) - self.current_xp).max(0)
    }
}
