//! Outcome and error types
//!
//! `Denied` is what eligibility checks and mutators hand back when a request
//! cannot go through. Its `Display` text is the reason shown to the player.
//! `CatalogError` covers broken skill data and is fatal at startup.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Shared resource pool owned by the character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Mp,
    Sp,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Mp => write!(f, "MP"),
            Resource::Sp => write!(f, "SP"),
        }
    }
}

/// Why a skill could not be used or leveled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Denied {
    #[error("Skill not found")]
    SkillNotFound { skill_id: String },

    #[error("No SP available")]
    NoSkillPoints,

    #[error("Requires level {required}")]
    LevelTooLow { required: u32 },

    #[error("Wrong job class")]
    WrongJob,

    #[error("Skill is at max level")]
    MaxLevel,

    #[error("Requires {name} Lv.{level}")]
    PrerequisiteUnmet { name: String, level: u32 },

    #[error("Not enough MP")]
    NotEnoughMp { required: i32, current: i32 },

    #[error("Cooldown: {}s", .remaining_ms.div_ceil(1000))]
    OnCooldown { remaining_ms: u64 },

    /// The pool refused a spend that passed validation (e.g. a concurrent spend)
    #[error("{resource} spend was refused")]
    ResourceConflict { resource: Resource },
}

impl Denied {
    pub fn skill_not_found(skill_id: &str) -> Self {
        Denied::SkillNotFound { skill_id: skill_id.to_string() }
    }

    /// True for aborts caused by the external pool rather than a failed check
    pub fn is_resource_conflict(&self) -> bool {
        matches!(self, Denied::ResourceConflict { .. })
    }
}

/// Skill data that must never reach gameplay
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate skill id `{0}`")]
    DuplicateId(String),

    #[error("skill `{skill}` requires unknown skill `{missing}`")]
    MissingPrerequisite { skill: String, missing: String },

    #[error("prerequisite cycle: {}", .path.join(" -> "))]
    PrerequisiteCycle { path: Vec<String> },

    #[error(
        "skill `{skill}` requires `{prerequisite}` Lv.{level}, above its max level {max_level}"
    )]
    UnreachablePrerequisite {
        skill: String,
        prerequisite: String,
        level: u32,
        max_level: u32,
    },

    #[error("skill `{0}` has a max level of 0")]
    ZeroMaxLevel(String),

    #[error("buff skill `{0}` has no buff definition")]
    MissingBuff(String),

    #[error("skill `{skill}` has a negative MP cost ({mp_cost})")]
    NegativeMpCost { skill: String, mp_cost: i32 },

    #[error("skill `{skill}` has invalid damage {damage}%")]
    InvalidDamage { skill: String, damage: f64 },

    #[error("buff skill `{skill}` has invalid magnitude {value}")]
    InvalidBuffValue { skill: String, value: f64 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize skills: {0}")]
    Serialize(#[from] ron::Error),
}

/// Skill tree snapshot failures
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Core configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("invalid damage variance {min}..{max}")]
    InvalidVariance { min: f64, max: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denial_reasons() {
        assert_eq!(Denied::NoSkillPoints.to_string(), "No SP available");
        assert_eq!(Denied::MaxLevel.to_string(), "Skill is at max level");
        assert_eq!(Denied::LevelTooLow { required: 10 }.to_string(), "Requires level 10");
        assert_eq!(
            Denied::PrerequisiteUnmet { name: "Power Strike".into(), level: 2 }.to_string(),
            "Requires Power Strike Lv.2"
        );
    }

    #[test]
    fn test_cooldown_reason_rounds_up() {
        assert_eq!(Denied::OnCooldown { remaining_ms: 2001 }.to_string(), "Cooldown: 3s");
        assert_eq!(Denied::OnCooldown { remaining_ms: 3000 }.to_string(), "Cooldown: 3s");
    }

    #[test]
    fn test_resource_conflict_flag() {
        assert!(Denied::ResourceConflict { resource: Resource::Mp }.is_resource_conflict());
        assert!(!Denied::WrongJob.is_resource_conflict());
    }
}
