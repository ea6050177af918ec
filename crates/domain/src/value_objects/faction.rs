//! Faction value object - the six fixed life-domains.
//!
//! Provides type safety for faction references instead of using magic
//! strings like "body" or "mind".

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of factions every user profile carries.
pub const FACTION_COUNT: usize = 6;

/// One of the six life-domains tracked independently per user.
///
/// The set is fixed: a user owns exactly one progress record per faction,
/// created when the profile is initialized and never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    /// Physical health: workouts, sleep, nutrition
    Body,
    /// Mental wellbeing: meditation, journaling, focus
    Mind,
    /// Relationships and social activity
    Social,
    /// Money habits: saving, budgeting, income
    Finance,
    /// Professional growth and work output
    Career,
    /// Learning: reading, courses, languages
    Knowledge,
    /// Unknown faction (for forward compatibility)
    #[serde(other)]
    Unknown,
}

impl Faction {
    /// All six factions, in dashboard display order (excludes Unknown).
    pub fn all() -> &'static [Faction] {
        &[
            Faction::Body,
            Faction::Mind,
            Faction::Social,
            Faction::Finance,
            Faction::Career,
            Faction::Knowledge,
        ]
    }

    /// Returns the snake_case identifier used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Body => "body",
            Faction::Mind => "mind",
            Faction::Social => "social",
            Faction::Finance => "finance",
            Faction::Career => "career",
            Faction::Knowledge => "knowledge",
            Faction::Unknown => "unknown",
        }
    }

    /// Returns the display name shown on dashboards.
    pub fn display_name(&self) -> &'static str {
        match self {
            Faction::Body => "Body",
            Faction::Mind => "Mind",
            Faction::Social => "Social",
            Faction::Finance => "Finance",
            Faction::Career => "Career",
            Faction::Knowledge => "Knowledge",
            Faction::Unknown => "Unknown",
        }
    }

    /// Returns an emoji representation for UI.
    pub fn emoji(&self) -> &'static str {
        match self {
            Faction::Body => "💪",
            Faction::Mind => "🧠",
            Faction::Social => "🤝",
            Faction::Finance => "💰",
            Faction::Career => "💼",
            Faction::Knowledge => "📚",
            Faction::Unknown => "❓",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Faction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "body" => Ok(Faction::Body),
            "mind" => Ok(Faction::Mind),
            "social" => Ok(Faction::Social),
            "finance" => Ok(Faction::Finance),
            "career" => Ok(Faction::Career),
            "knowledge" => Ok(Faction::Knowledge),
            other => Err(DomainError::validation(format!(
                "Unknown faction: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_exactly_six() {
        assert_eq!(Faction::all().len(), FACTION_COUNT);
        assert!(!Faction::all().contains(&Faction::Unknown));
    }

    #[test]
    fn round_trips_through_str() {
        for faction in Faction::all() {
            assert_eq!(Faction::from_str(faction.as_str()), Ok(*faction));
        }
    }

    #[test]
    fn unknown_string_is_rejected() {
        assert!(Faction::from_str("vibes").is_err());
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&Faction::Knowledge).expect("serialize");
        assert_eq!(json, "\"knowledge\"");
    }

    #[test]
    fn unrecognized_serialized_value_maps_to_unknown() {
        let faction: Faction = serde_json::from_str("\"spirituality\"").expect("deserialize");
        assert_eq!(faction, Faction::Unknown);
    }
}
