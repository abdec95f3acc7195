//! Skill catalog
//!
//! Process-wide, read-only table of skill definitions. Built once through
//! [`SkillCatalog::from_definitions`], which rejects any data that could
//! wedge progression (missing or cyclic prerequisites).

use std::collections::HashMap;

use crate::error::CatalogError;

use super::jobs::JobId;
use super::skills::{default_skills, SkillCategory, SkillDefinition};

/// Validated collection of skill definitions
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    skills: Vec<SkillDefinition>,
    index: HashMap<String, usize>,
}

/// Skills of one job grouped by category, for skill-tree panels
#[derive(Debug, Clone, Default)]
pub struct SkillsByCategory<'a> {
    pub attack: Vec<&'a SkillDefinition>,
    pub buff: Vec<&'a SkillDefinition>,
    pub passive: Vec<&'a SkillDefinition>,
    pub mobility: Vec<&'a SkillDefinition>,
}

impl SkillCatalog {
    /// Build a catalog, validating ids and the prerequisite graph
    pub fn from_definitions(skills: Vec<SkillDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(skills.len());
        for (i, skill) in skills.iter().enumerate() {
            if index.insert(skill.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(skill.id.clone()));
            }
        }

        let catalog = Self { skills, index };
        catalog.validate()?;
        log::debug!("Skill catalog validated ({} skills)", catalog.len());
        Ok(catalog)
    }

    /// Catalog of the built-in skill set
    pub fn with_defaults() -> Result<Self, CatalogError> {
        Self::from_definitions(default_skills())
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for skill in &self.skills {
            if skill.max_level == 0 {
                return Err(CatalogError::ZeroMaxLevel(skill.id.clone()));
            }
            if skill.is_buff() && skill.buff.is_none() {
                return Err(CatalogError::MissingBuff(skill.id.clone()));
            }
            Self::check_values(skill)?;
            if let Some(prereq) = &skill.prerequisite {
                let target = self.get(&prereq.skill_id).ok_or_else(|| {
                    CatalogError::MissingPrerequisite {
                        skill: skill.id.clone(),
                        missing: prereq.skill_id.clone(),
                    }
                })?;
                if prereq.level > target.max_level {
                    return Err(CatalogError::UnreachablePrerequisite {
                        skill: skill.id.clone(),
                        prerequisite: target.id.clone(),
                        level: prereq.level,
                        max_level: target.max_level,
                    });
                }
            }
        }
        self.check_acyclic()
    }

    /// Costs and magnitudes at both ends of the level range
    fn check_values(skill: &SkillDefinition) -> Result<(), CatalogError> {
        for mp_cost in [skill.mp_cost, skill.at_max.mp_cost] {
            if mp_cost < 0 {
                return Err(CatalogError::NegativeMpCost {
                    skill: skill.id.clone(),
                    mp_cost,
                });
            }
        }

        let is_valid = |v: f64| v.is_finite() && v >= 0.0;
        for damage in [skill.damage, skill.at_max.damage] {
            if !is_valid(damage) {
                return Err(CatalogError::InvalidDamage {
                    skill: skill.id.clone(),
                    damage,
                });
            }
        }

        if let Some(buff) = &skill.buff {
            for value in [buff.value, buff.value_at_max] {
                if !is_valid(value) {
                    return Err(CatalogError::InvalidBuffValue {
                        skill: skill.id.clone(),
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Depth-first walk over prerequisite edges, three colours per node
    fn check_acyclic(&self) -> Result<(), CatalogError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.skills.len()];

        for start in 0..self.skills.len() {
            if marks[start] == Mark::Done {
                continue;
            }
            // Each skill has at most one prerequisite, so the walk is a chain
            let mut path: Vec<usize> = Vec::new();
            let mut current = Some(start);
            while let Some(i) = current {
                match marks[i] {
                    Mark::Done => break,
                    Mark::InProgress => {
                        let from = path.iter().position(|&p| p == i).unwrap_or(0);
                        let mut cycle: Vec<String> =
                            path[from..].iter().map(|&p| self.skills[p].id.clone()).collect();
                        cycle.push(self.skills[i].id.clone());
                        return Err(CatalogError::PrerequisiteCycle { path: cycle });
                    }
                    Mark::Unvisited => {
                        marks[i] = Mark::InProgress;
                        path.push(i);
                        current = self.skills[i]
                            .prerequisite
                            .as_ref()
                            .and_then(|p| self.index.get(&p.skill_id).copied());
                    }
                }
            }
            for i in path {
                marks[i] = Mark::Done;
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&SkillDefinition> {
        self.index.get(id).map(|&i| &self.skills[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All skills in definition order
    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.iter()
    }

    pub fn definitions(&self) -> &[SkillDefinition] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills a job can learn (its own plus universal ones)
    pub fn for_job(&self, job: JobId) -> Vec<&SkillDefinition> {
        self.skills.iter().filter(|s| s.is_available_to(job)).collect()
    }

    /// Skills a job can learn, grouped by category
    pub fn by_category(&self, job: JobId) -> SkillsByCategory<'_> {
        let mut grouped = SkillsByCategory::default();
        for skill in self.for_job(job) {
            match skill.category {
                SkillCategory::Attack => grouped.attack.push(skill),
                SkillCategory::Buff => grouped.buff.push(skill),
                SkillCategory::Passive => grouped.passive.push(skill),
                SkillCategory::Mobility => grouped.mobility.push(skill),
            }
        }
        grouped
    }
}
