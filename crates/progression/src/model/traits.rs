//! The progression-model capability trait.
//!
//! Both XP models implement this trait so that call sites select a strategy
//! per entity type instead of branching on type tags inline.

/// A progression model: the bijection between level and cumulative XP plus
/// the derived progress percentage.
///
/// Implementations must be total: any integer input (negative, zero,
/// pathologically large) yields a defined result. Out-of-range values clamp;
/// nothing here errors or panics.
pub trait ProgressionModel: Send + Sync {
    /// Unique identifier for this model (e.g., "quadratic", "power_law").
    fn model_id(&self) -> &str;

    /// Human-readable display name.
    fn display_name(&self) -> &str;

    /// XP required to reach `level` under this model.
    ///
    /// For the quadratic model this is a cumulative threshold; for the
    /// power-law model it is the per-level cost. Returns 0 for level 0.
    fn xp_for_level(&self, level: u32) -> i64;

    /// Derive a level from cumulative XP. Always at least 1.
    fn level_from_xp(&self, total_xp: i64) -> u32;

    /// Percentage progress toward the next level, from cumulative XP.
    ///
    /// Rounded to whole percent and clamped to `[0, 100]`.
    fn progress_percent(&self, total_xp: i64) -> u32;
}
