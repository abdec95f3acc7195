//! Skill data and catalog loading
//!
//! Static skill definitions, job identifiers, and the validated catalog
//! loaded from external RON files for data-driven content.

pub mod jobs;
pub mod skills;
pub mod catalog;
pub mod loader;

pub use jobs::{JobId, JobRequirement};
pub use skills::{
    BuffSpec, DamageType, HitRegion, Knockback, MaxLevelValues, Prerequisite, SkillCategory,
    SkillDefinition, Stat, TargetShape,
};
pub use catalog::{SkillCatalog, SkillsByCategory};
pub use loader::{export_default_skills, SKILLS_FILE};
