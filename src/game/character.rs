//! Character resources
//!
//! The skill core never keeps a copy of character stats. It reads and spends
//! them through these traits, implemented by the host's stat component.
//! [`CharacterStats`] is a plain implementation for hosts without one and
//! for tests.

use serde::{Deserialize, Serialize};

use crate::data::JobId;

/// Level and job of a character
pub trait CharacterSheet {
    fn level(&self) -> u32;
    fn job(&self) -> JobId;
}

/// MP pool; a spend may be refused even after a successful check
pub trait ManaPool {
    fn current_mp(&self) -> i32;
    fn spend_mp(&mut self, amount: i32) -> bool;
}

/// Unassigned skill points
pub trait SkillPointPool {
    fn unassigned_sp(&self) -> u32;
    fn spend_sp(&mut self, amount: u32) -> bool;
    fn credit_sp(&mut self, amount: u32);
}

/// Offensive stats before buffs
pub trait AttackStats {
    fn attack(&self) -> i32;
    fn magic_attack(&self) -> i32;
}

/// Skill points granted per character level gained
pub const SP_PER_LEVEL: u32 = 3;

/// Simple stat block implementing every resource trait
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub level: u32,
    pub job: JobId,
    pub unassigned_sp: u32,
    pub current_mp: i32,
    pub max_mp: i32,
    pub attack: i32,
    pub magic_attack: i32,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self {
            level: 1,
            job: JobId::Beginner,
            unassigned_sp: 0,
            current_mp: 44,
            max_mp: 44,
            attack: 10,
            magic_attack: 10,
        }
    }
}

impl CharacterStats {
    pub fn new(job: JobId, level: u32) -> Self {
        Self { job, level, ..Self::default() }
    }

    /// Gain a character level, earning skill points
    pub fn gain_level(&mut self) {
        self.level += 1;
        self.unassigned_sp += SP_PER_LEVEL;
    }

    /// Restore MP up to the maximum, returning the amount restored
    pub fn restore_mp(&mut self, amount: i32) -> i32 {
        let before = self.current_mp;
        self.current_mp = (self.current_mp + amount.max(0)).min(self.max_mp);
        self.current_mp - before
    }
}

impl CharacterSheet for CharacterStats {
    fn level(&self) -> u32 {
        self.level
    }

    fn job(&self) -> JobId {
        self.job
    }
}

impl ManaPool for CharacterStats {
    fn current_mp(&self) -> i32 {
        self.current_mp
    }

    fn spend_mp(&mut self, amount: i32) -> bool {
        if amount < 0 || self.current_mp < amount {
            return false;
        }
        self.current_mp -= amount;
        true
    }
}

impl SkillPointPool for CharacterStats {
    fn unassigned_sp(&self) -> u32 {
        self.unassigned_sp
    }

    fn spend_sp(&mut self, amount: u32) -> bool {
        if self.unassigned_sp < amount {
            return false;
        }
        self.unassigned_sp -= amount;
        true
    }

    fn credit_sp(&mut self, amount: u32) {
        self.unassigned_sp += amount;
    }
}

impl AttackStats for CharacterStats {
    fn attack(&self) -> i32 {
        self.attack
    }

    fn magic_attack(&self) -> i32 {
        self.magic_attack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spend_mp_refuses_overdraft() {
        let mut stats = CharacterStats { current_mp: 5, ..Default::default() };
        assert!(!stats.spend_mp(6));
        assert_eq!(stats.current_mp, 5);
        assert!(stats.spend_mp(5));
        assert_eq!(stats.current_mp, 0);
    }

    #[test]
    fn test_gain_level_awards_sp() {
        let mut stats = CharacterStats::new(JobId::Warrior, 10);
        stats.gain_level();
        assert_eq!(stats.level, 11);
        assert_eq!(stats.unassigned_sp, SP_PER_LEVEL);
    }

    #[test]
    fn test_restore_mp_caps_at_max() {
        let mut stats = CharacterStats { current_mp: 40, max_mp: 44, ..Default::default() };
        assert_eq!(stats.restore_mp(10), 4);
        assert_eq!(stats.current_mp, 44);
    }
}
