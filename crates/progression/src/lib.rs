//! # Projekt L Progression
//!
//! Pure XP/level/progression math: the innermost layer of the engine.
//!
//! Two progression models coexist because different entity types level
//! differently:
//!
//! - [`QuadraticProgression`] - the six life-domain factions. Level is a pure
//!   projection of cumulative XP (`floor(sqrt(xp / 100))`, minimum 1).
//! - [`PowerLawProgression`] - individual skills and the overall character.
//!   Each level costs `floor(100 * level^1.5)` XP and progress is tracked as
//!   a per-level remainder.
//!
//! ## Design Principles
//!
//! 1. **Pure functions** - no I/O, no shared state, no suspension points.
//!    Safe to call from any number of concurrent contexts without locking.
//! 2. **Total over integers** - negative, zero, and pathologically large
//!    inputs clamp rather than error. There is no failure taxonomy here.
//! 3. **Level is derived data** - callers must never store a level as
//!    independent truth for the faction model; it is always recomputed from
//!    cumulative XP.
//!
//! Persistence of results (and the read-modify-write discipline around it)
//! belongs to the caller; see [`resolver::add_xp`].

pub mod model;
pub mod resolver;

pub use model::{
    calculate_faction_level, faction_level_progress, level_from_xp, progress_to_next_level,
    total_xp_for_level, xp_for_faction_level, xp_for_level, PowerLawProgression, ProgressionModel,
    ProgressionRegistry, QuadraticProgression,
};
pub use resolver::{add_xp, XpApplication};
