//! Skillcore - combat skill resolution for a 2D action RPG
//!
//! Skill definitions and their per-level scaling, a per-character skill
//! tree funded by skill points, and the runtime that checks and resolves
//! skill use (MP, cooldowns, buffs, outgoing damage and hit areas).
//!
//! The crate never drives a game loop, renders, or applies damage to
//! targets. Character resources, time and scheduling are supplied by the
//! host through the traits in [`game`].

pub mod combat;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod game;
pub mod progression;
pub mod save;

// Re-export commonly used types
pub use combat::{AttackProposal, Cast, Facing, Point, Rect, SkillOutcome, SkillRuntime};
pub use config::CoreConfig;
pub use data::{JobId, SkillCatalog, SkillDefinition};
pub use error::{CatalogError, Denied};
pub use events::{EventSink, SkillEvent};
pub use progression::{EffectiveSkillStats, ProgressionLedger};
pub use save::SkillTreeSnapshot;
