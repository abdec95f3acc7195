//! Skill runtime
//!
//! Live per-character skill state: cooldown expiry times and active buffs.
//! Resolves whether a skill can be used right now and what using it does.
//!
//! Per skill there are two independent machines. Cooldown:
//! Ready -> (use) -> OnCooldown -> (time) -> Ready. Buff skills also drive
//! BuffActive -> (expiry or clear) -> BuffInactive.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::CoreConfig;
use crate::data::{BuffSpec, DamageType, Knockback, SkillCatalog, SkillDefinition, Stat};
use crate::error::{Denied, Resource};
use crate::events::{EventSink, Notifier, SkillEvent};
use crate::game::{
    AttackStats, CharacterSheet, Clock, ManaPool, NoScheduler, Scheduler, SystemClock,
};
use crate::progression::{effective_stats, EffectiveSkillStats, SkillLevels};

use super::buffs::{ActiveBuff, BuffSet, BuffTimer};
use super::damage::{offensive_stat, roll_damage, DamageVariance};
use super::hitbox::{directed_knockback, hit_rect, Facing, Point, Rect};

/// Where and which way the caster is when using a skill
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cast {
    pub position: Point,
    pub facing: Facing,
}

impl Cast {
    pub fn new(position: Point, facing: Facing) -> Self {
        Self { position, facing }
    }
}

/// Outgoing attack for the combat layer to resolve against targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackProposal {
    pub skill_id: String,
    pub damage: i64,
    pub damage_type: DamageType,
    pub hitbox: Rect,
    pub facing: Facing,
    pub max_targets: u32,
    pub knockback: Knockback,
}

/// What a successful skill use produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkillOutcome {
    Buff(ActiveBuff),
    Attack(AttackProposal),
}

impl SkillOutcome {
    pub fn damage(&self) -> Option<i64> {
        match self {
            SkillOutcome::Attack(attack) => Some(attack.damage),
            SkillOutcome::Buff(_) => None,
        }
    }

    pub fn hitbox(&self) -> Option<Rect> {
        match self {
            SkillOutcome::Attack(attack) => Some(attack.hitbox),
            SkillOutcome::Buff(_) => None,
        }
    }
}

/// Cooldowns and buffs of one character
pub struct SkillRuntime<C: Clock = SystemClock> {
    catalog: Arc<SkillCatalog>,
    clock: C,
    scheduler: Box<dyn Scheduler>,
    variance: DamageVariance,
    /// Skill id -> time the skill becomes usable again
    cooldowns: HashMap<String, u64>,
    buffs: BuffSet,
    notifier: Notifier,
}

impl<C: Clock> SkillRuntime<C> {
    pub fn new(catalog: Arc<SkillCatalog>, clock: C) -> Self {
        Self {
            catalog,
            clock,
            scheduler: Box::new(NoScheduler),
            variance: DamageVariance::default(),
            cooldowns: HashMap::new(),
            buffs: BuffSet::new(),
            notifier: Notifier::default(),
        }
    }

    /// Schedule buff removals through the host's timer primitive
    pub fn with_scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.scheduler = Box::new(scheduler);
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.notifier.set(sink);
        self
    }

    pub fn with_variance(mut self, variance: DamageVariance) -> Self {
        self.variance = variance;
        self
    }

    pub fn with_config(self, config: &CoreConfig) -> Self {
        self.with_variance(config.damage_variance)
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Check whether a skill can be used now. The first failing check wins.
    pub fn can_use<H>(
        &self,
        character: &H,
        levels: &impl SkillLevels,
        skill_id: &str,
    ) -> Result<(), Denied>
    where
        H: CharacterSheet + ManaPool,
    {
        let skill = self.catalog.get(skill_id).ok_or_else(|| Denied::skill_not_found(skill_id))?;

        if !skill.is_available_to(character.job()) {
            return Err(Denied::WrongJob);
        }

        if character.level() < skill.required_level {
            return Err(Denied::LevelTooLow { required: skill.required_level });
        }

        let stats = effective_stats(skill, levels.skill_level(skill_id));
        let current = character.current_mp();
        if current < stats.mp_cost {
            return Err(Denied::NotEnoughMp { required: stats.mp_cost, current });
        }

        let remaining_ms = self.cooldown_remaining(skill_id);
        if remaining_ms > 0 {
            return Err(Denied::OnCooldown { remaining_ms });
        }

        Ok(())
    }

    /// Use a skill: spend MP, start the cooldown, then apply the buff or
    /// propose an attack. Nothing changes if any step is refused.
    pub fn use_skill<H>(
        &mut self,
        character: &mut H,
        levels: &impl SkillLevels,
        skill_id: &str,
        cast: Cast,
        rng: &mut impl Rng,
    ) -> Result<SkillOutcome, Denied>
    where
        H: CharacterSheet + ManaPool + AttackStats,
    {
        if let Err(reason) = self.can_use(character, levels, skill_id) {
            log::debug!("Cannot use skill {}: {}", skill_id, reason);
            return Err(reason);
        }

        let catalog = Arc::clone(&self.catalog);
        let skill = catalog.get(skill_id).ok_or_else(|| Denied::skill_not_found(skill_id))?;
        let stats = effective_stats(skill, levels.skill_level(skill_id));

        if !character.spend_mp(stats.mp_cost) {
            log::debug!("MP spend refused while using {}", skill_id);
            return Err(Denied::ResourceConflict { resource: Resource::Mp });
        }

        let now = self.clock.now_ms();
        self.cooldowns.insert(skill_id.to_string(), now + stats.cooldown_ms);

        let outcome = match skill.buff.as_ref().filter(|_| skill.is_buff()) {
            Some(spec) => SkillOutcome::Buff(self.apply_buff(skill, spec, &stats, now)),
            None => SkillOutcome::Attack(self.propose_attack(skill, &stats, character, cast, rng)),
        };

        log::debug!("Used {} (cooldown {} ms)", skill.name, stats.cooldown_ms);
        self.notifier.emit(SkillEvent::SkillUsed {
            skill_id: skill_id.to_string(),
            outcome: outcome.clone(),
        });
        Ok(outcome)
    }

    fn apply_buff(
        &mut self,
        skill: &SkillDefinition,
        spec: &BuffSpec,
        stats: &EffectiveSkillStats,
        now: u64,
    ) -> ActiveBuff {
        let buff = ActiveBuff {
            skill_id: skill.id.clone(),
            stat: spec.stat,
            value: stats.buff_value.unwrap_or(spec.value),
            expires_at: now + spec.duration_ms,
        };

        self.buffs.apply(buff.clone());
        self.scheduler.schedule(spec.duration_ms, buff.timer());
        self.notifier.emit(SkillEvent::BuffApplied(buff.clone()));
        buff
    }

    fn propose_attack<H: AttackStats>(
        &self,
        skill: &SkillDefinition,
        stats: &EffectiveSkillStats,
        character: &H,
        cast: Cast,
        rng: &mut impl Rng,
    ) -> AttackProposal {
        let attack = character.attack() as f64 + self.buff_bonus(Stat::Atk);
        let magic_attack = character.magic_attack() as f64 + self.buff_bonus(Stat::Matk);
        let stat = offensive_stat(skill.damage_type, attack, magic_attack);

        AttackProposal {
            skill_id: skill.id.clone(),
            damage: roll_damage(stat, stats.damage, self.variance, rng),
            damage_type: skill.damage_type,
            hitbox: hit_rect(&skill.hitbox, cast.position, cast.facing),
            facing: cast.facing,
            max_targets: skill.max_targets,
            knockback: directed_knockback(skill.knockback, cast.facing),
        }
    }

    /// Fire a scheduled buff removal. Stale timers (the buff was reapplied
    /// or already removed) do nothing.
    pub fn on_timer(&mut self, timer: &BuffTimer) -> Option<ActiveBuff> {
        let expired = self.buffs.expire(timer)?;
        self.notifier.emit(SkillEvent::BuffExpired(expired.clone()));
        Some(expired)
    }

    /// Per-frame sweep of expired buffs, independent of scheduled timers
    pub fn tick(&mut self) -> Vec<ActiveBuff> {
        let expired = self.buffs.sweep(self.clock.now_ms());
        for buff in &expired {
            self.notifier.emit(SkillEvent::BuffExpired(buff.clone()));
        }
        expired
    }

    /// Sum of unexpired buffs on a stat
    pub fn buff_bonus(&self, stat: Stat) -> f64 {
        self.buffs.bonus(stat, self.clock.now_ms())
    }

    pub fn active_buffs(&self) -> Vec<ActiveBuff> {
        self.buffs.active(self.clock.now_ms())
    }

    /// Remove a skill's buff early
    pub fn clear_buff(&mut self, skill_id: &str) -> Option<ActiveBuff> {
        let cleared = self.buffs.clear(skill_id)?;
        self.notifier.emit(SkillEvent::BuffExpired(cleared.clone()));
        Some(cleared)
    }

    pub fn clear_all_buffs(&mut self) -> Vec<ActiveBuff> {
        let cleared = self.buffs.clear_all();
        for buff in &cleared {
            self.notifier.emit(SkillEvent::BuffExpired(buff.clone()));
        }
        cleared
    }

    pub fn cooldown_remaining(&self, skill_id: &str) -> u64 {
        self.cooldowns
            .get(skill_id)
            .map(|&ready_at| ready_at.saturating_sub(self.clock.now_ms()))
            .unwrap_or(0)
    }

    /// Remaining share of a cooldown in `[0, 1]`, for progress overlays
    pub fn cooldown_fraction(&self, skill_id: &str, total_ms: u64) -> f64 {
        let remaining = self.cooldown_remaining(skill_id);
        if remaining == 0 || total_ms == 0 {
            return 0.0;
        }
        (remaining as f64 / total_ms as f64).min(1.0)
    }

    pub fn is_ready(&self, skill_id: &str) -> bool {
        self.cooldown_remaining(skill_id) == 0
    }
}
