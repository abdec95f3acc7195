//! Skill tree
//!
//! Per-character record of invested skill levels. Spending SP is the only way
//! a level goes up and a full reset the only way levels come back down, so
//! the invested total always equals SP spent minus SP refunded.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::{JobId, SkillCatalog, SkillDefinition, SkillsByCategory};
use crate::error::{Denied, Resource};
use crate::events::{EventSink, Notifier, SkillEvent};
use crate::game::{CharacterSheet, SkillPointPool};
use crate::save::SkillTreeSnapshot;

use super::scaling::{effective_stats, EffectiveSkillStats};

/// Read access to invested skill levels
pub trait SkillLevels {
    /// Invested level, 0 for skills never leveled
    fn skill_level(&self, skill_id: &str) -> u32;
}

impl SkillLevels for HashMap<String, u32> {
    fn skill_level(&self, skill_id: &str) -> u32 {
        self.get(skill_id).copied().unwrap_or(0)
    }
}

/// A successful level-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLeveled {
    pub skill_id: String,
    pub skill_name: String,
    pub old_level: u32,
    pub new_level: u32,
    pub max_level: u32,
}

/// Stats at the invested level and the one after, for tooltips
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillPreview {
    pub level: u32,
    pub max_level: u32,
    pub current: EffectiveSkillStats,
    /// `None` once the skill is at max level
    pub next: Option<EffectiveSkillStats>,
}

/// Result of restoring a saved skill tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestoreReport {
    /// Skills restored with a nonzero level
    pub skills: usize,
    /// Levels held by unknown skills or above a skill's max level
    pub sp_discarded: u32,
}

/// A character's invested skill levels
#[derive(Debug)]
pub struct ProgressionLedger {
    catalog: Arc<SkillCatalog>,
    levels: HashMap<String, u32>,
    notifier: Notifier,
}

impl ProgressionLedger {
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self { catalog, levels: HashMap::new(), notifier: Notifier::default() }
    }

    /// Ledger that reports progression events to `sink`
    pub fn with_sink(catalog: Arc<SkillCatalog>, sink: Box<dyn EventSink>) -> Self {
        Self { catalog, levels: HashMap::new(), notifier: Notifier::new(Some(sink)) }
    }

    pub fn set_sink(&mut self, sink: Box<dyn EventSink>) {
        self.notifier.set(sink);
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn level(&self, skill_id: &str) -> u32 {
        self.levels.get(skill_id).copied().unwrap_or(0)
    }

    /// All invested levels, zero entries omitted
    pub fn levels(&self) -> BTreeMap<String, u32> {
        self.levels
            .iter()
            .filter(|(_, &level)| level > 0)
            .map(|(id, &level)| (id.clone(), level))
            .collect()
    }

    /// Check whether a skill can gain a level. The first failing check wins.
    pub fn can_level_up<C>(&self, character: &C, skill_id: &str) -> Result<(), Denied>
    where
        C: CharacterSheet + SkillPointPool,
    {
        let skill = self.catalog.get(skill_id).ok_or_else(|| Denied::skill_not_found(skill_id))?;

        if character.unassigned_sp() == 0 {
            return Err(Denied::NoSkillPoints);
        }

        if character.level() < skill.required_level {
            return Err(Denied::LevelTooLow { required: skill.required_level });
        }

        if !skill.is_available_to(character.job()) {
            return Err(Denied::WrongJob);
        }

        if self.level(skill_id) >= skill.max_level {
            return Err(Denied::MaxLevel);
        }

        if let Some(prereq) = &skill.prerequisite {
            if self.level(&prereq.skill_id) < prereq.level {
                let name = self
                    .catalog
                    .get(&prereq.skill_id)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| prereq.skill_id.clone());
                return Err(Denied::PrerequisiteUnmet { name, level: prereq.level });
            }
        }

        Ok(())
    }

    /// Spend one SP to raise a skill by one level
    pub fn level_up<C>(&mut self, character: &mut C, skill_id: &str) -> Result<SkillLeveled, Denied>
    where
        C: CharacterSheet + SkillPointPool,
    {
        if let Err(reason) = self.can_level_up(character, skill_id) {
            log::debug!("Cannot level up skill {}: {}", skill_id, reason);
            return Err(reason);
        }

        let skill = self.catalog.get(skill_id).ok_or_else(|| Denied::skill_not_found(skill_id))?;

        if !character.spend_sp(1) {
            log::debug!("SP spend refused while leveling {}", skill_id);
            return Err(Denied::ResourceConflict { resource: Resource::Sp });
        }

        let old_level = self.levels.get(skill_id).copied().unwrap_or(0);
        let new_level = old_level + 1;
        self.levels.insert(skill_id.to_string(), new_level);

        let leveled = SkillLeveled {
            skill_id: skill_id.to_string(),
            skill_name: skill.name.clone(),
            old_level,
            new_level,
            max_level: skill.max_level,
        };
        log::info!("{} leveled to {}/{}", skill.name, new_level, skill.max_level);
        self.notifier.emit(SkillEvent::SkillLeveled(leveled.clone()));
        Ok(leveled)
    }

    /// Clear every invested level and refund the SP
    pub fn reset_all(&mut self, pool: &mut impl SkillPointPool) -> u32 {
        let refunded = self.total_sp_invested();
        self.levels.clear();
        pool.credit_sp(refunded);

        log::info!("Skill tree reset, {} SP refunded", refunded);
        self.notifier.emit(SkillEvent::SkillsReset { sp_refunded: refunded });
        refunded
    }

    pub fn total_sp_invested(&self) -> u32 {
        self.levels.values().sum()
    }

    pub fn is_unlocked(&self, skill_id: &str) -> bool {
        self.level(skill_id) > 0
    }

    pub fn is_available(&self, skill_id: &str, job: JobId) -> bool {
        self.catalog.get(skill_id).is_some_and(|s| s.is_available_to(job))
    }

    pub fn available_skills(&self, job: JobId) -> Vec<&SkillDefinition> {
        self.catalog.for_job(job)
    }

    pub fn skills_by_category(&self, job: JobId) -> SkillsByCategory<'_> {
        self.catalog.by_category(job)
    }

    /// Stats at the invested level
    pub fn effective_stats(&self, skill_id: &str) -> Option<EffectiveSkillStats> {
        let skill = self.catalog.get(skill_id)?;
        Some(effective_stats(skill, self.level(skill_id)))
    }

    /// Stats at the invested level and the next one
    pub fn preview(&self, skill_id: &str) -> Option<SkillPreview> {
        let skill = self.catalog.get(skill_id)?;
        let level = self.level(skill_id);
        Some(SkillPreview {
            level,
            max_level: skill.max_level,
            current: effective_stats(skill, level),
            next: (level < skill.max_level).then(|| effective_stats(skill, level + 1)),
        })
    }

    pub fn snapshot(&self) -> SkillTreeSnapshot {
        SkillTreeSnapshot::new(self.levels())
    }

    /// Replace all levels with a saved snapshot
    ///
    /// Unknown skills are dropped and levels above max are clamped, both
    /// with a warning. The SP those levels held is reported back so the
    /// host can credit it to the character's pool.
    pub fn restore(&mut self, snapshot: &SkillTreeSnapshot) -> RestoreReport {
        self.levels.clear();
        let mut report = RestoreReport::default();

        for (skill_id, &level) in &snapshot.skill_levels {
            if level == 0 {
                continue;
            }
            let Some(skill) = self.catalog.get(skill_id) else {
                log::warn!("Dropping unknown skill {} from saved skill tree", skill_id);
                report.sp_discarded += level;
                continue;
            };
            let level = if level > skill.max_level {
                log::warn!(
                    "Saved level {} for {} exceeds max {}, clamping",
                    level,
                    skill_id,
                    skill.max_level
                );
                report.sp_discarded += level - skill.max_level;
                skill.max_level
            } else {
                level
            };
            self.levels.insert(skill_id.clone(), level);
        }

        report.skills = self.levels.len();
        if report.sp_discarded > 0 {
            log::warn!("{} SP from the saved skill tree was not restored", report.sp_discarded);
        }
        log::info!("Skill tree loaded ({} skills)", report.skills);
        self.notifier.emit(SkillEvent::SkillTreeLoaded {
            skills: report.skills,
        });
        report
    }
}

impl SkillLevels for ProgressionLedger {
    fn skill_level(&self, skill_id: &str) -> u32 {
        self.level(skill_id)
    }
}
