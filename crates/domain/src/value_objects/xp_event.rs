//! XP gain events - the transient input handed to the engine.
//!
//! Events are produced by the activity handlers (habit completion, quest
//! completion, workout logging) and consumed immediately; the engine never
//! persists them.

use crate::ids::SkillId;
use crate::value_objects::Faction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of activity that produced an XP delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpSource {
    /// Completing a scheduled habit
    Habit,
    /// Finishing a quest
    Quest,
    /// Logging a workout
    Workout,
    /// Unlocking an achievement
    Achievement,
    /// Streak-break or other penalty (amount is negative)
    Penalty,
    /// Manual adjustment by the user
    Manual,
}

impl XpSource {
    /// Display name for activity feeds.
    pub fn display_name(&self) -> &'static str {
        match self {
            XpSource::Habit => "Habit",
            XpSource::Quest => "Quest",
            XpSource::Workout => "Workout",
            XpSource::Achievement => "Achievement",
            XpSource::Penalty => "Penalty",
            XpSource::Manual => "Manual",
        }
    }
}

/// The entity an XP delta is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpTarget {
    /// A life-domain faction (cumulative-total model)
    Faction(Faction),
    /// An individual skill (per-level remainder model)
    Skill(SkillId),
}

/// A single XP delta plus its provenance.
///
/// `amount` may be negative for penalty flows. `awarded_at` is metadata for
/// the caller's activity feed; the math never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpGainEvent {
    /// Signed XP delta.
    pub amount: i64,
    /// Activity kind that produced the delta.
    pub source: XpSource,
    /// Entity the delta applies to.
    pub target: XpTarget,
    /// When the activity happened.
    pub awarded_at: DateTime<Utc>,
}

impl XpGainEvent {
    /// Event stamped with the current time.
    pub fn new(amount: i64, source: XpSource, target: XpTarget) -> Self {
        Self {
            amount,
            source,
            target,
            awarded_at: Utc::now(),
        }
    }

    /// Whether this event reduces XP.
    pub fn is_penalty(&self) -> bool {
        self.amount < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_detection() {
        let target = XpTarget::Faction(Faction::Body);
        assert!(XpGainEvent::new(-10, XpSource::Penalty, target).is_penalty());
        assert!(!XpGainEvent::new(25, XpSource::Habit, target).is_penalty());
        assert!(!XpGainEvent::new(0, XpSource::Manual, target).is_penalty());
    }

    #[test]
    fn serde_round_trip() {
        let event = XpGainEvent::new(50, XpSource::Quest, XpTarget::Skill(SkillId::new()));
        let json = serde_json::to_string(&event).expect("serialize");
        let back: XpGainEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }
}
