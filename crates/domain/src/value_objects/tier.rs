//! Tier value object - named rank labels derived from character level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named rank derived from the overall character level, for display only.
///
/// Pure lookup over fixed breakpoints; nothing in the engine branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Levels 1-24
    Beginner,
    /// Levels 25-49
    Advanced,
    /// Levels 50-74
    Expert,
    /// Levels 75-99
    Master,
    /// Level 100 and beyond
    Legendary,
}

impl Tier {
    /// Map a character level onto its tier.
    pub fn from_level(level: u32) -> Self {
        match level {
            0..=24 => Tier::Beginner,
            25..=49 => Tier::Advanced,
            50..=74 => Tier::Expert,
            75..=99 => Tier::Master,
            _ => Tier::Legendary,
        }
    }

    /// Display name shown next to the character header.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Advanced => "Advanced",
            Tier::Expert => "Expert",
            Tier::Master => "Master",
            Tier::Legendary => "Legendary",
        }
    }

    /// Color token consumed by the UI theme.
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Beginner => "slate",
            Tier::Advanced => "emerald",
            Tier::Expert => "sky",
            Tier::Master => "violet",
            Tier::Legendary => "amber",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
