//! Value objects - immutable objects defined by their attributes

mod faction;
mod progress;
mod tier;
mod xp_event;

pub use faction::{Faction, FACTION_COUNT};
pub use progress::{FactionProgress, SkillProgress};
pub use tier::Tier;
pub use xp_event::{XpGainEvent, XpSource, XpTarget};
