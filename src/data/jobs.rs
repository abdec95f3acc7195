//! Job classes
//!
//! The job table itself lives with the host; the skill core only needs the
//! identifiers and the "any job" rule.

use serde::{Deserialize, Serialize};

/// Job class of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobId {
    #[default]
    Beginner,
    Warrior,
    Mage,
    Archer,
    Thief,
}

impl JobId {
    pub fn name(&self) -> &'static str {
        match self {
            JobId::Beginner => "Beginner",
            JobId::Warrior => "Warrior",
            JobId::Mage => "Mage",
            JobId::Archer => "Archer",
            JobId::Thief => "Thief",
        }
    }

    pub fn all() -> [JobId; 5] {
        [JobId::Beginner, JobId::Warrior, JobId::Mage, JobId::Archer, JobId::Thief]
    }
}

/// Which jobs may learn and use a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JobRequirement {
    /// Usable by every job
    #[default]
    Any,
    Job(JobId),
}

impl JobRequirement {
    pub fn allows(&self, job: JobId) -> bool {
        match self {
            JobRequirement::Any => true,
            JobRequirement::Job(required) => *required == job,
        }
    }
}
