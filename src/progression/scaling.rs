//! Per-level skill scaling
//!
//! Every stat read in the crate goes through [`effective_stats`], so the
//! skill-tree preview and the value applied in combat always agree.
//!
//! Scaling is linear: `v = base * (1 - t) + max * t` with
//! `t = level / max_level`. Integer stats round to nearest.

use serde::{Deserialize, Serialize};

use crate::data::SkillDefinition;

/// Stats of a skill at a specific level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveSkillStats {
    /// Percentage of the attack stat
    pub damage: f64,
    pub mp_cost: i32,
    pub cooldown_ms: u64,
    /// Buff magnitude, for buff skills only
    pub buff_value: Option<f64>,
}

/// Stats of `skill` at `level`, clamped to `[0, max_level]`
pub fn effective_stats(skill: &SkillDefinition, level: u32) -> EffectiveSkillStats {
    let t = progress(level, skill.max_level);
    let max = &skill.at_max;

    EffectiveSkillStats {
        damage: lerp(skill.damage, max.damage, t),
        mp_cost: lerp(skill.mp_cost as f64, max.mp_cost as f64, t).round() as i32,
        cooldown_ms: lerp(skill.cooldown_ms as f64, max.cooldown_ms as f64, t)
            .round()
            .max(0.0) as u64,
        buff_value: skill.buff.map(|b| lerp(b.value, b.value_at_max, t)),
    }
}

/// Fraction of the way to max level
fn progress(level: u32, max_level: u32) -> f64 {
    if max_level == 0 {
        return 0.0;
    }
    level.min(max_level) as f64 / max_level as f64
}

// This form returns `from` exactly at t = 0 and `to` exactly at t = 1
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

impl SkillDefinition {
    /// Shorthand for [`effective_stats`]
    pub fn stats_at(&self, level: u32) -> EffectiveSkillStats {
        effective_stats(self, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::skills::{default_skills, skill_power_strike, skill_rage};

    #[test]
    fn test_level_zero_matches_base() {
        for skill in default_skills() {
            let stats = effective_stats(&skill, 0);
            assert_eq!(stats.damage, skill.damage, "{}", skill.id);
            assert_eq!(stats.mp_cost, skill.mp_cost, "{}", skill.id);
            assert_eq!(stats.cooldown_ms, skill.cooldown_ms, "{}", skill.id);
            assert_eq!(stats.buff_value, skill.buff.map(|b| b.value), "{}", skill.id);
        }
    }

    #[test]
    fn test_max_level_matches_configured_values() {
        for skill in default_skills() {
            let stats = effective_stats(&skill, skill.max_level);
            assert_eq!(stats.damage, skill.at_max.damage, "{}", skill.id);
            assert_eq!(stats.mp_cost, skill.at_max.mp_cost, "{}", skill.id);
            assert_eq!(stats.cooldown_ms, skill.at_max.cooldown_ms, "{}", skill.id);
            assert_eq!(stats.buff_value, skill.buff.map(|b| b.value_at_max), "{}", skill.id);
        }
    }

    #[test]
    fn test_linear_midpoint() {
        // Power Strike: 120% -> 260%, 5 MP -> 12 MP over 10 levels
        let stats = effective_stats(&skill_power_strike(), 5);
        assert!((stats.damage - 190.0).abs() < 1e-9);
        assert_eq!(stats.mp_cost, 9); // 8.5 rounds up
        assert_eq!(stats.cooldown_ms, 3000);
    }

    #[test]
    fn test_level_above_max_is_clamped() {
        let skill = skill_rage();
        assert_eq!(effective_stats(&skill, 99), effective_stats(&skill, skill.max_level));
    }

    #[test]
    fn test_scaling_is_monotonic() {
        let skill = skill_rage();
        let mut previous = effective_stats(&skill, 0);
        for level in 1..=skill.max_level {
            let stats = effective_stats(&skill, level);
            assert!(stats.mp_cost >= previous.mp_cost);
            assert!(stats.cooldown_ms <= previous.cooldown_ms);
            assert!(stats.buff_value >= previous.buff_value);
            previous = stats;
        }
    }
}
