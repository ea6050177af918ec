//! Quadratic progression model used by the six life-domain factions.
//!
//! Level is never stored for factions; it is always derived fresh from
//! cumulative XP via `level = floor(sqrt(xp / 100))`, clamped to a minimum
//! of 1. Dashboard radar charts, balance-bonus checks, and faction progress
//! bars all go through these functions so the semantics stay identical at
//! every call site.

use super::traits::ProgressionModel;

/// XP required to reach a faction level: `level^2 * 100`.
///
/// Defined for `level >= 1`; level 0 is not used by callers.
pub fn xp_for_faction_level(level: u32) -> i64 {
    // Saturating keeps the function total for levels that could only be
    // reached with near-i64::MAX cumulative XP.
    i64::from(level)
        .saturating_mul(i64::from(level))
        .saturating_mul(100)
}

/// Derive a faction level from cumulative XP.
///
/// Always returns at least 1: zero and negative XP clamp to level 1 rather
/// than erroring. Inverse of [`xp_for_faction_level`] at exact thresholds,
/// so `calculate_faction_level(xp_for_faction_level(l)) == l` for `l >= 1`.
pub fn calculate_faction_level(total_xp: i64) -> u32 {
    let xp = total_xp.max(0) as f64;
    let level = (xp / 100.0).sqrt().floor() as u32;
    level.max(1)
}

/// Percentage progress from the current level's threshold to the next one.
///
/// Returns 0 at an exact threshold (the user has just reached that level,
/// zero progress into the next). Clamped to `[0, 100]` for any input,
/// including absurdly large totals.
pub fn faction_level_progress(total_xp: i64) -> u32 {
    let xp = total_xp.max(0);
    let level = calculate_faction_level(xp);
    let current = xp_for_faction_level(level);
    let next = xp_for_faction_level(level + 1);
    if next <= current {
        // Threshold arithmetic saturated; the total is effectively at cap.
        return 100;
    }
    let span = (next - current) as f64;
    let pct = (((xp - current) as f64 / span) * 100.0).round() as i64;
    pct.clamp(0, 100) as u32
}

/// Quadratic progression strategy for faction entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticProgression;

impl QuadraticProgression {
    /// Create a new quadratic model instance.
    pub fn new() -> Self {
        Self
    }
}

impl ProgressionModel for QuadraticProgression {
    fn model_id(&self) -> &str {
        "quadratic"
    }

    fn display_name(&self) -> &str {
        "Quadratic (factions)"
    }

    fn xp_for_level(&self, level: u32) -> i64 {
        xp_for_faction_level(level)
    }

    fn level_from_xp(&self, total_xp: i64) -> u32 {
        calculate_faction_level(total_xp)
    }

    fn progress_percent(&self, total_xp: i64) -> u32 {
        faction_level_progress(total_xp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faction_level_thresholds() {
        assert_eq!(xp_for_faction_level(1), 100);
        assert_eq!(xp_for_faction_level(2), 400);
        assert_eq!(xp_for_faction_level(5), 2500);
        assert_eq!(xp_for_faction_level(10), 10000);
        assert_eq!(xp_for_faction_level(50), 250000);
    }

    #[test]
    fn level_from_xp_scenarios() {
        assert_eq!(calculate_faction_level(0), 1);
        assert_eq!(calculate_faction_level(99), 1);
        assert_eq!(calculate_faction_level(100), 1);
        assert_eq!(calculate_faction_level(400), 2);
        assert_eq!(calculate_faction_level(900), 3);
        assert_eq!(calculate_faction_level(2500), 5);
        assert_eq!(calculate_faction_level(250000), 50);
    }

    #[test]
    fn negative_xp_clamps_to_level_one() {
        assert_eq!(calculate_faction_level(-1), 1);
        assert_eq!(calculate_faction_level(-100), 1);
        assert_eq!(calculate_faction_level(i64::MIN / 2), 1);
    }

    #[test]
    fn inverse_law_holds_at_thresholds() {
        for level in 1..=200 {
            assert_eq!(
                calculate_faction_level(xp_for_faction_level(level)),
                level,
                "inverse law failed at level {level}"
            );
        }
    }

    #[test]
    fn level_is_monotonic_in_xp() {
        let mut previous = calculate_faction_level(0);
        for xp in (0..=300_000).step_by(37) {
            let level = calculate_faction_level(xp);
            assert!(level >= previous, "level decreased at xp {xp}");
            previous = level;
        }
    }

    #[test]
    fn quadratic_growth_ratio() {
        // Doubling the level quadruples the threshold
        assert_eq!(xp_for_faction_level(10) / xp_for_faction_level(5), 4);
    }

    #[test]
    fn progress_scenarios() {
        // At exactly the level-2 threshold: zero progress into level 3
        assert_eq!(faction_level_progress(400), 0);
        // Level 2 spans 400..900; 550 is 30% of the way
        assert_eq!(faction_level_progress(550), 30);
        assert_eq!(faction_level_progress(650), 50);
        assert_eq!(faction_level_progress(850), 90);
    }

    #[test]
    fn progress_is_bounded() {
        assert!(faction_level_progress(10_000_000) <= 100);
        assert_eq!(faction_level_progress(-500), 0);
        for xp in (0..=50_000).step_by(13) {
            let pct = faction_level_progress(xp);
            assert!(pct <= 100, "progress {pct} out of bounds at xp {xp}");
        }
    }

    #[test]
    fn below_first_threshold_reports_zero_progress() {
        // 0..100 XP is still level 1 with nothing earned toward level 2
        assert_eq!(faction_level_progress(0), 0);
        assert_eq!(faction_level_progress(99), 0);
    }

    #[test]
    fn strategy_matches_free_functions() {
        let model = QuadraticProgression::new();
        assert_eq!(model.model_id(), "quadratic");
        assert_eq!(model.xp_for_level(5), xp_for_faction_level(5));
        assert_eq!(model.level_from_xp(2500), 5);
        assert_eq!(model.progress_percent(550), 30);
        assert_eq!(model.xp_for_level(0), 0);
    }
}
