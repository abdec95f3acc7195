//! Host-facing collaborators
//!
//! Character resources and timing primitives the skill core consumes.

pub mod character;
pub mod time;

pub use character::{
    AttackStats, CharacterSheet, CharacterStats, ManaPool, SkillPointPool, SP_PER_LEVEL,
};
pub use time::{Clock, ManualClock, NoScheduler, Scheduler, SystemClock, TimerQueue};
