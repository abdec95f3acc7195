//! Skill definitions
//!
//! Static skill data shared by every character. Definitions are plain
//! serializable values so content can live in `skills.ron`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::jobs::{JobId, JobRequirement};

/// What a skill does when used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SkillCategory {
    #[default]
    Attack,
    Buff,
    Passive,
    Mobility,
}

impl SkillCategory {
    pub fn name(&self) -> &'static str {
        match self {
            SkillCategory::Attack => "Attack",
            SkillCategory::Buff => "Buff",
            SkillCategory::Passive => "Passive",
            SkillCategory::Mobility => "Mobility",
        }
    }
}

/// Which offensive stat a skill draws on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DamageType {
    #[default]
    Physical,
    Magical,
    /// Ignores defense on the receiving end
    True,
}

/// Shape of the area a skill reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetShape {
    #[default]
    Single,
    Area,
    SelfOnly,
    Line,
}

/// Character stat a buff can modify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Atk,
    Matk,
    Def,
    Mdef,
    Accuracy,
    Avoidability,
    Speed,
    Jump,
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Stat::Atk => "ATK",
            Stat::Matk => "MATK",
            Stat::Def => "DEF",
            Stat::Mdef => "MDEF",
            Stat::Accuracy => "ACC",
            Stat::Avoidability => "AVOID",
            Stat::Speed => "SPEED",
            Stat::Jump => "JUMP",
        };
        f.write_str(code)
    }
}

/// Hit region relative to the caster, for a caster facing right
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HitRegion {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Knockback applied to targets, for a caster facing right
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Knockback {
    pub x: f32,
    pub y: f32,
}

/// A skill that must be leveled before this one can be
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prerequisite {
    pub skill_id: String,
    pub level: u32,
}

/// Stat modifier granted by a buff skill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuffSpec {
    pub stat: Stat,
    /// Magnitude at level 0
    pub value: f64,
    /// Magnitude at max level
    pub value_at_max: f64,
    pub duration_ms: u64,
}

/// Values a skill reaches at its max level
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MaxLevelValues {
    pub damage: f64,
    pub mp_cost: i32,
    pub cooldown_ms: u64,
}

/// A skill definition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub job: JobRequirement,
    pub category: SkillCategory,
    pub damage_type: DamageType,
    pub target: TargetShape,
    pub mp_cost: i32,
    pub cooldown_ms: u64,
    /// Percentage of the attack stat (100 = 100% of ATK)
    pub damage: f64,
    pub max_targets: u32,
    pub hitbox: HitRegion,
    #[serde(default)]
    pub knockback: Knockback,
    pub required_level: u32,
    pub max_level: u32,
    pub at_max: MaxLevelValues,
    #[serde(default)]
    pub prerequisite: Option<Prerequisite>,
    #[serde(default)]
    pub buff: Option<BuffSpec>,
}

impl SkillDefinition {
    pub fn is_buff(&self) -> bool {
        self.category == SkillCategory::Buff
    }

    pub fn is_available_to(&self, job: JobId) -> bool {
        self.job.allows(job)
    }
}

// =============================================================================
// Beginner Skills (any job)
// =============================================================================

pub fn skill_three_snails() -> SkillDefinition {
    SkillDefinition {
        id: "THREE_SNAILS".to_string(),
        name: "Three Snails".to_string(),
        description: "Throw a snail shell at the nearest enemy.".to_string(),
        target: TargetShape::Line,
        mp_cost: 3,
        cooldown_ms: 800,
        damage: 110.0,
        max_targets: 1,
        hitbox: HitRegion { width: 160.0, height: 30.0, offset_x: 20.0, offset_y: 0.0 },
        knockback: Knockback { x: 40.0, y: -20.0 },
        required_level: 1,
        max_level: 3,
        at_max: MaxLevelValues { damage: 150.0, mp_cost: 5, cooldown_ms: 800 },
        ..Default::default()
    }
}

pub fn skill_nimble_feet() -> SkillDefinition {
    SkillDefinition {
        id: "NIMBLE_FEET".to_string(),
        name: "Nimble Feet".to_string(),
        description: "Move faster for a short time.".to_string(),
        category: SkillCategory::Buff,
        target: TargetShape::SelfOnly,
        mp_cost: 4,
        cooldown_ms: 20000,
        max_targets: 1,
        required_level: 1,
        max_level: 3,
        at_max: MaxLevelValues { damage: 0.0, mp_cost: 6, cooldown_ms: 15000 },
        buff: Some(BuffSpec {
            stat: Stat::Speed,
            value: 5.0,
            value_at_max: 15.0,
            duration_ms: 8000,
        }),
        ..Default::default()
    }
}

pub fn skill_recovery() -> SkillDefinition {
    SkillDefinition {
        id: "RECOVERY".to_string(),
        name: "Recovery".to_string(),
        description: "Recover extra HP while standing still.".to_string(),
        category: SkillCategory::Passive,
        target: TargetShape::SelfOnly,
        required_level: 1,
        max_level: 3,
        ..Default::default()
    }
}

// =============================================================================
// Warrior Skills
// =============================================================================

pub fn skill_power_strike() -> SkillDefinition {
    SkillDefinition {
        id: "POWER_STRIKE".to_string(),
        name: "Power Strike".to_string(),
        description: "A powerful single-target attack.".to_string(),
        job: JobRequirement::Job(JobId::Warrior),
        mp_cost: 5,
        cooldown_ms: 3000,
        damage: 120.0,
        max_targets: 1,
        hitbox: HitRegion { width: 80.0, height: 60.0, offset_x: 50.0, offset_y: 0.0 },
        knockback: Knockback { x: 150.0, y: -100.0 },
        required_level: 1,
        max_level: 10,
        at_max: MaxLevelValues { damage: 260.0, mp_cost: 12, cooldown_ms: 3000 },
        ..Default::default()
    }
}

pub fn skill_double_strike() -> SkillDefinition {
    SkillDefinition {
        id: "DOUBLE_STRIKE".to_string(),
        name: "Double Strike".to_string(),
        description: "Strike twice in rapid succession.".to_string(),
        job: JobRequirement::Job(JobId::Warrior),
        mp_cost: 12,
        cooldown_ms: 600,
        damage: 120.0,
        max_targets: 2,
        hitbox: HitRegion { width: 70.0, height: 50.0, offset_x: 45.0, offset_y: 0.0 },
        knockback: Knockback { x: 80.0, y: -50.0 },
        required_level: 1,
        max_level: 10,
        at_max: MaxLevelValues { damage: 200.0, mp_cost: 18, cooldown_ms: 500 },
        ..Default::default()
    }
}

pub fn skill_slash_blast() -> SkillDefinition {
    SkillDefinition {
        id: "SLASH_BLAST".to_string(),
        name: "Slash Blast".to_string(),
        description: "Slash multiple enemies in front of you.".to_string(),
        job: JobRequirement::Job(JobId::Warrior),
        target: TargetShape::Area,
        mp_cost: 15,
        cooldown_ms: 800,
        damage: 140.0,
        max_targets: 4,
        hitbox: HitRegion { width: 150.0, height: 80.0, offset_x: 60.0, offset_y: 0.0 },
        knockback: Knockback { x: 100.0, y: -80.0 },
        required_level: 10,
        max_level: 10,
        at_max: MaxLevelValues { damage: 200.0, mp_cost: 22, cooldown_ms: 600 },
        prerequisite: Some(Prerequisite { skill_id: "POWER_STRIKE".to_string(), level: 1 }),
        ..Default::default()
    }
}

pub fn skill_rage() -> SkillDefinition {
    SkillDefinition {
        id: "RAGE".to_string(),
        name: "Rage".to_string(),
        description: "Increase attack power temporarily.".to_string(),
        job: JobRequirement::Job(JobId::Warrior),
        category: SkillCategory::Buff,
        target: TargetShape::SelfOnly,
        mp_cost: 20,
        cooldown_ms: 30000,
        max_targets: 1,
        required_level: 10,
        max_level: 10,
        at_max: MaxLevelValues { damage: 0.0, mp_cost: 30, cooldown_ms: 20000 },
        buff: Some(BuffSpec {
            stat: Stat::Atk,
            value: 10.0,
            value_at_max: 30.0,
            duration_ms: 60000,
        }),
        ..Default::default()
    }
}

pub fn skill_ground_smash() -> SkillDefinition {
    SkillDefinition {
        id: "GROUND_SMASH".to_string(),
        name: "Ground Smash".to_string(),
        description: "Slam the ground, striking every enemy around you.".to_string(),
        job: JobRequirement::Job(JobId::Warrior),
        target: TargetShape::Area,
        mp_cost: 25,
        cooldown_ms: 5000,
        damage: 160.0,
        max_targets: 6,
        hitbox: HitRegion { width: 220.0, height: 60.0, offset_x: -40.0, offset_y: 10.0 },
        knockback: Knockback { x: 60.0, y: -160.0 },
        required_level: 15,
        max_level: 10,
        at_max: MaxLevelValues { damage: 280.0, mp_cost: 35, cooldown_ms: 3500 },
        prerequisite: Some(Prerequisite { skill_id: "SLASH_BLAST".to_string(), level: 3 }),
        ..Default::default()
    }
}

pub fn skill_iron_body() -> SkillDefinition {
    SkillDefinition {
        id: "IRON_BODY".to_string(),
        name: "Iron Body".to_string(),
        description: "Harden your body, raising defense.".to_string(),
        job: JobRequirement::Job(JobId::Warrior),
        category: SkillCategory::Buff,
        target: TargetShape::SelfOnly,
        mp_cost: 15,
        cooldown_ms: 45000,
        max_targets: 1,
        required_level: 12,
        max_level: 10,
        at_max: MaxLevelValues { damage: 0.0, mp_cost: 25, cooldown_ms: 30000 },
        buff: Some(BuffSpec {
            stat: Stat::Def,
            value: 10.0,
            value_at_max: 40.0,
            duration_ms: 60000,
        }),
        ..Default::default()
    }
}

// =============================================================================
// Mage Skills
// =============================================================================

pub fn skill_magic_bolt() -> SkillDefinition {
    SkillDefinition {
        id: "MAGIC_BOLT".to_string(),
        name: "Magic Bolt".to_string(),
        description: "Fire a bolt of pure magic.".to_string(),
        job: JobRequirement::Job(JobId::Mage),
        damage_type: DamageType::Magical,
        target: TargetShape::Line,
        mp_cost: 10,
        cooldown_ms: 600,
        damage: 130.0,
        max_targets: 1,
        hitbox: HitRegion { width: 300.0, height: 30.0, offset_x: 20.0, offset_y: -10.0 },
        knockback: Knockback { x: 60.0, y: -30.0 },
        required_level: 10,
        max_level: 10,
        at_max: MaxLevelValues { damage: 230.0, mp_cost: 16, cooldown_ms: 500 },
        ..Default::default()
    }
}

pub fn skill_fire_arrow() -> SkillDefinition {
    SkillDefinition {
        id: "FIRE_ARROW".to_string(),
        name: "Fire Arrow".to_string(),
        description: "Launch a burning arrow of flame.".to_string(),
        job: JobRequirement::Job(JobId::Mage),
        damage_type: DamageType::Magical,
        target: TargetShape::Line,
        mp_cost: 18,
        cooldown_ms: 1000,
        damage: 180.0,
        max_targets: 1,
        hitbox: HitRegion { width: 320.0, height: 40.0, offset_x: 20.0, offset_y: -10.0 },
        knockback: Knockback { x: 90.0, y: -40.0 },
        required_level: 15,
        max_level: 10,
        at_max: MaxLevelValues { damage: 300.0, mp_cost: 26, cooldown_ms: 800 },
        prerequisite: Some(Prerequisite { skill_id: "MAGIC_BOLT".to_string(), level: 2 }),
        ..Default::default()
    }
}

pub fn skill_ice_beam() -> SkillDefinition {
    SkillDefinition {
        id: "ICE_BEAM".to_string(),
        name: "Ice Beam".to_string(),
        description: "Freeze enemies in a wide area.".to_string(),
        job: JobRequirement::Job(JobId::Mage),
        damage_type: DamageType::Magical,
        target: TargetShape::Area,
        mp_cost: 30,
        cooldown_ms: 4000,
        damage: 150.0,
        max_targets: 5,
        hitbox: HitRegion { width: 200.0, height: 100.0, offset_x: 30.0, offset_y: 0.0 },
        required_level: 20,
        max_level: 10,
        at_max: MaxLevelValues { damage: 250.0, mp_cost: 40, cooldown_ms: 3000 },
        prerequisite: Some(Prerequisite { skill_id: "FIRE_ARROW".to_string(), level: 3 }),
        ..Default::default()
    }
}

pub fn skill_teleport() -> SkillDefinition {
    SkillDefinition {
        id: "TELEPORT".to_string(),
        name: "Teleport".to_string(),
        description: "Blink a short distance forward.".to_string(),
        job: JobRequirement::Job(JobId::Mage),
        category: SkillCategory::Mobility,
        target: TargetShape::SelfOnly,
        mp_cost: 12,
        cooldown_ms: 2000,
        required_level: 10,
        max_level: 5,
        at_max: MaxLevelValues { damage: 0.0, mp_cost: 8, cooldown_ms: 1000 },
        ..Default::default()
    }
}

pub fn skill_magic_guard() -> SkillDefinition {
    SkillDefinition {
        id: "MAGIC_GUARD".to_string(),
        name: "Magic Guard".to_string(),
        description: "Wrap yourself in a protective ward.".to_string(),
        job: JobRequirement::Job(JobId::Mage),
        category: SkillCategory::Buff,
        target: TargetShape::SelfOnly,
        mp_cost: 20,
        cooldown_ms: 40000,
        max_targets: 1,
        required_level: 12,
        max_level: 10,
        at_max: MaxLevelValues { damage: 0.0, mp_cost: 28, cooldown_ms: 30000 },
        buff: Some(BuffSpec {
            stat: Stat::Mdef,
            value: 15.0,
            value_at_max: 45.0,
            duration_ms: 90000,
        }),
        ..Default::default()
    }
}

// =============================================================================
// Archer Skills
// =============================================================================

pub fn skill_double_shot() -> SkillDefinition {
    SkillDefinition {
        id: "DOUBLE_SHOT".to_string(),
        name: "Double Shot".to_string(),
        description: "Fire two arrows in quick succession.".to_string(),
        job: JobRequirement::Job(JobId::Archer),
        target: TargetShape::Line,
        mp_cost: 8,
        cooldown_ms: 600,
        damage: 120.0,
        max_targets: 1,
        hitbox: HitRegion { width: 350.0, height: 30.0, offset_x: 20.0, offset_y: -5.0 },
        knockback: Knockback { x: 50.0, y: -20.0 },
        required_level: 10,
        max_level: 10,
        at_max: MaxLevelValues { damage: 190.0, mp_cost: 12, cooldown_ms: 500 },
        ..Default::default()
    }
}

pub fn skill_arrow_bomb() -> SkillDefinition {
    SkillDefinition {
        id: "ARROW_BOMB".to_string(),
        name: "Arrow Bomb".to_string(),
        description: "An explosive arrow that hits nearby enemies.".to_string(),
        job: JobRequirement::Job(JobId::Archer),
        target: TargetShape::Area,
        mp_cost: 16,
        cooldown_ms: 1500,
        damage: 140.0,
        max_targets: 4,
        hitbox: HitRegion { width: 120.0, height: 80.0, offset_x: 200.0, offset_y: 0.0 },
        knockback: Knockback { x: 80.0, y: -120.0 },
        required_level: 15,
        max_level: 10,
        at_max: MaxLevelValues { damage: 220.0, mp_cost: 24, cooldown_ms: 1200 },
        prerequisite: Some(Prerequisite { skill_id: "DOUBLE_SHOT".to_string(), level: 2 }),
        ..Default::default()
    }
}

pub fn skill_arrow_rain() -> SkillDefinition {
    SkillDefinition {
        id: "ARROW_RAIN".to_string(),
        name: "Arrow Rain".to_string(),
        description: "Rain arrows down on a wide area.".to_string(),
        job: JobRequirement::Job(JobId::Archer),
        target: TargetShape::Area,
        mp_cost: 32,
        cooldown_ms: 6000,
        damage: 170.0,
        max_targets: 8,
        hitbox: HitRegion { width: 300.0, height: 120.0, offset_x: 60.0, offset_y: -20.0 },
        required_level: 20,
        max_level: 10,
        at_max: MaxLevelValues { damage: 290.0, mp_cost: 44, cooldown_ms: 4500 },
        prerequisite: Some(Prerequisite { skill_id: "ARROW_BOMB".to_string(), level: 3 }),
        ..Default::default()
    }
}

pub fn skill_soul_arrow() -> SkillDefinition {
    SkillDefinition {
        id: "SOUL_ARROW".to_string(),
        name: "Soul Arrow".to_string(),
        description: "Empower your arrows with spirit.".to_string(),
        job: JobRequirement::Job(JobId::Archer),
        category: SkillCategory::Buff,
        target: TargetShape::SelfOnly,
        mp_cost: 18,
        cooldown_ms: 30000,
        max_targets: 1,
        required_level: 12,
        max_level: 10,
        at_max: MaxLevelValues { damage: 0.0, mp_cost: 26, cooldown_ms: 20000 },
        buff: Some(BuffSpec {
            stat: Stat::Atk,
            value: 8.0,
            value_at_max: 24.0,
            duration_ms: 60000,
        }),
        ..Default::default()
    }
}

pub fn skill_focus() -> SkillDefinition {
    SkillDefinition {
        id: "FOCUS".to_string(),
        name: "Focus".to_string(),
        description: "Concentrate to raise accuracy.".to_string(),
        job: JobRequirement::Job(JobId::Archer),
        category: SkillCategory::Buff,
        target: TargetShape::SelfOnly,
        mp_cost: 10,
        cooldown_ms: 30000,
        max_targets: 1,
        required_level: 10,
        max_level: 10,
        at_max: MaxLevelValues { damage: 0.0, mp_cost: 16, cooldown_ms: 20000 },
        buff: Some(BuffSpec {
            stat: Stat::Accuracy,
            value: 10.0,
            value_at_max: 30.0,
            duration_ms: 60000,
        }),
        ..Default::default()
    }
}

// =============================================================================
// Thief Skills
// =============================================================================

pub fn skill_lucky_seven() -> SkillDefinition {
    SkillDefinition {
        id: "LUCKY_SEVEN".to_string(),
        name: "Lucky Seven".to_string(),
        description: "Throw two throwing stars at once.".to_string(),
        job: JobRequirement::Job(JobId::Thief),
        target: TargetShape::Line,
        mp_cost: 8,
        cooldown_ms: 600,
        damage: 125.0,
        max_targets: 1,
        hitbox: HitRegion { width: 300.0, height: 30.0, offset_x: 20.0, offset_y: -5.0 },
        knockback: Knockback { x: 40.0, y: -20.0 },
        required_level: 10,
        max_level: 10,
        at_max: MaxLevelValues { damage: 195.0, mp_cost: 13, cooldown_ms: 500 },
        ..Default::default()
    }
}

pub fn skill_double_stab() -> SkillDefinition {
    SkillDefinition {
        id: "DOUBLE_STAB".to_string(),
        name: "Double Stab".to_string(),
        description: "Stab twice with lightning speed.".to_string(),
        job: JobRequirement::Job(JobId::Thief),
        mp_cost: 9,
        cooldown_ms: 500,
        damage: 130.0,
        max_targets: 1,
        hitbox: HitRegion { width: 60.0, height: 50.0, offset_x: 40.0, offset_y: 0.0 },
        knockback: Knockback { x: 60.0, y: -30.0 },
        required_level: 10,
        max_level: 10,
        at_max: MaxLevelValues { damage: 210.0, mp_cost: 14, cooldown_ms: 400 },
        ..Default::default()
    }
}

pub fn skill_disorder() -> SkillDefinition {
    SkillDefinition {
        id: "DISORDER".to_string(),
        name: "Disorder".to_string(),
        description: "A strike that slips past any armor.".to_string(),
        job: JobRequirement::Job(JobId::Thief),
        damage_type: DamageType::True,
        mp_cost: 14,
        cooldown_ms: 2500,
        damage: 90.0,
        max_targets: 1,
        hitbox: HitRegion { width: 70.0, height: 50.0, offset_x: 40.0, offset_y: 0.0 },
        knockback: Knockback { x: 30.0, y: 0.0 },
        required_level: 15,
        max_level: 10,
        at_max: MaxLevelValues { damage: 150.0, mp_cost: 20, cooldown_ms: 2000 },
        prerequisite: Some(Prerequisite { skill_id: "DOUBLE_STAB".to_string(), level: 2 }),
        ..Default::default()
    }
}

pub fn skill_haste() -> SkillDefinition {
    SkillDefinition {
        id: "HASTE".to_string(),
        name: "Haste".to_string(),
        description: "Move and jump faster.".to_string(),
        job: JobRequirement::Job(JobId::Thief),
        category: SkillCategory::Buff,
        target: TargetShape::SelfOnly,
        mp_cost: 14,
        cooldown_ms: 30000,
        max_targets: 1,
        required_level: 12,
        max_level: 10,
        at_max: MaxLevelValues { damage: 0.0, mp_cost: 22, cooldown_ms: 20000 },
        buff: Some(BuffSpec {
            stat: Stat::Speed,
            value: 10.0,
            value_at_max: 30.0,
            duration_ms: 60000,
        }),
        ..Default::default()
    }
}

pub fn skill_dark_sight() -> SkillDefinition {
    SkillDefinition {
        id: "DARK_SIGHT".to_string(),
        name: "Dark Sight".to_string(),
        description: "Melt into the shadows, becoming hard to hit.".to_string(),
        job: JobRequirement::Job(JobId::Thief),
        category: SkillCategory::Buff,
        target: TargetShape::SelfOnly,
        mp_cost: 12,
        cooldown_ms: 20000,
        max_targets: 1,
        required_level: 10,
        max_level: 10,
        at_max: MaxLevelValues { damage: 0.0, mp_cost: 18, cooldown_ms: 12000 },
        buff: Some(BuffSpec {
            stat: Stat::Avoidability,
            value: 15.0,
            value_at_max: 50.0,
            duration_ms: 30000,
        }),
        ..Default::default()
    }
}

// =============================================================================
// Skill Collections
// =============================================================================

/// Skills every job can learn
pub fn beginner_skills() -> Vec<SkillDefinition> {
    vec![skill_three_snails(), skill_nimble_feet(), skill_recovery()]
}

/// Skills belonging to a job (beginner skills are not included)
pub fn job_skills(job: JobId) -> Vec<SkillDefinition> {
    match job {
        JobId::Beginner => Vec::new(),
        JobId::Warrior => vec![
            skill_power_strike(),
            skill_double_strike(),
            skill_slash_blast(),
            skill_rage(),
            skill_ground_smash(),
            skill_iron_body(),
        ],
        JobId::Mage => vec![
            skill_magic_bolt(),
            skill_fire_arrow(),
            skill_ice_beam(),
            skill_teleport(),
            skill_magic_guard(),
        ],
        JobId::Archer => vec![
            skill_double_shot(),
            skill_arrow_bomb(),
            skill_arrow_rain(),
            skill_soul_arrow(),
            skill_focus(),
        ],
        JobId::Thief => vec![
            skill_lucky_seven(),
            skill_double_stab(),
            skill_disorder(),
            skill_haste(),
            skill_dark_sight(),
        ],
    }
}

/// The complete built-in skill set
pub fn default_skills() -> Vec<SkillDefinition> {
    let mut all = beginner_skills();
    for job in JobId::all() {
        all.extend(job_skills(job));
    }
    all
}
