//! Active buffs
//!
//! Timed stat modifiers granted by buff skills. One buff per source skill;
//! buffs from different skills on the same stat stack additively.

use serde::{Deserialize, Serialize};

use crate::data::Stat;

/// A buff currently applied to a character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveBuff {
    pub skill_id: String,
    pub stat: Stat,
    pub value: f64,
    pub expires_at: u64,
}

impl ActiveBuff {
    pub fn is_active(&self, now_ms: u64) -> bool {
        self.expires_at > now_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }

    /// Identity token for the scheduled removal of this buff
    pub fn timer(&self) -> BuffTimer {
        BuffTimer { skill_id: self.skill_id.clone(), expires_at: self.expires_at }
    }
}

/// Scheduled removal of one specific buff application
///
/// Matches only the application it was created for: once the buff is
/// reapplied, the old token no longer removes anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuffTimer {
    pub skill_id: String,
    pub expires_at: u64,
}

/// Buffs applied to one character
#[derive(Debug, Clone, Default)]
pub struct BuffSet {
    buffs: Vec<ActiveBuff>,
}

impl BuffSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a buff, replacing any buff from the same skill
    pub fn apply(&mut self, buff: ActiveBuff) -> Option<ActiveBuff> {
        let replaced = self
            .buffs
            .iter()
            .position(|b| b.skill_id == buff.skill_id)
            .map(|i| self.buffs.remove(i));
        self.buffs.push(buff);
        replaced
    }

    /// Remove the buff a timer was scheduled for, if it is still that buff
    pub fn expire(&mut self, timer: &BuffTimer) -> Option<ActiveBuff> {
        let i = self
            .buffs
            .iter()
            .position(|b| b.skill_id == timer.skill_id && b.expires_at == timer.expires_at)?;
        Some(self.buffs.remove(i))
    }

    /// Remove the buff from a skill regardless of expiry
    pub fn clear(&mut self, skill_id: &str) -> Option<ActiveBuff> {
        let i = self.buffs.iter().position(|b| b.skill_id == skill_id)?;
        Some(self.buffs.remove(i))
    }

    pub fn clear_all(&mut self) -> Vec<ActiveBuff> {
        std::mem::take(&mut self.buffs)
    }

    /// Remove every expired buff, returning them
    pub fn sweep(&mut self, now_ms: u64) -> Vec<ActiveBuff> {
        let (active, expired): (Vec<ActiveBuff>, Vec<ActiveBuff>) = std::mem::take(&mut self.buffs)
            .into_iter()
            .partition(|b| b.is_active(now_ms));
        self.buffs = active;
        expired
    }

    /// Sum of unexpired buffs on a stat
    pub fn bonus(&self, stat: Stat, now_ms: u64) -> f64 {
        self.buffs
            .iter()
            .filter(|b| b.stat == stat && b.is_active(now_ms))
            .map(|b| b.value)
            .sum()
    }

    pub fn get(&self, skill_id: &str) -> Option<&ActiveBuff> {
        self.buffs.iter().find(|b| b.skill_id == skill_id)
    }

    /// Unexpired buffs, in application order
    pub fn active(&self, now_ms: u64) -> Vec<ActiveBuff> {
        self.buffs.iter().filter(|b| b.is_active(now_ms)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.buffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty()
    }
}
