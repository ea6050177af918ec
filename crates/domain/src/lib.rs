//! # Projekt L Domain
//!
//! Value objects and shared vocabulary for the Projekt L progression engine:
//! the six life-domain factions, per-faction and per-skill progress records,
//! XP gain events, tier labels, and the derived stats dashboards consume.
//!
//! The numeric models themselves live in `projektl-progression`; this crate
//! layers the domain vocabulary and data-model invariants on top. Everything
//! here is pure values: persistence, notifications, and UI feedback belong
//! to the calling handlers.

pub mod common;
pub mod error;
pub mod ids;
pub mod stats;
pub mod value_objects;

pub use common::format_xp;
pub use error::DomainError;
pub use ids::{SkillId, UserId};
pub use stats::{has_balance_bonus, BALANCE_BONUS_MIN_LEVEL};
pub use value_objects::{
    Faction, FactionProgress, SkillProgress, Tier, XpGainEvent, XpSource, XpTarget, FACTION_COUNT,
};

// Re-export the numeric engine so callers need a single dependency.
pub use projektl_progression as progression;
