//! Progression systems

pub mod scaling;
pub mod ledger;

pub use scaling::{effective_stats, EffectiveSkillStats};
pub use ledger::{ProgressionLedger, RestoreReport, SkillLeveled, SkillLevels, SkillPreview};
