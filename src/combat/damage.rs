//! Outgoing skill damage
//!
//! Produces the raw damage a skill proposes. Defense and mitigation belong
//! to the receiving side and are not applied here.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::DamageType;

/// Uniform random multiplier range applied to every hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageVariance {
    pub min: f64,
    pub max: f64,
}

impl Default for DamageVariance {
    fn default() -> Self {
        Self { min: 0.9, max: 1.1 }
    }
}

impl DamageVariance {
    pub fn is_valid(&self) -> bool {
        self.min > 0.0 && self.min <= self.max && self.max.is_finite()
    }

    fn roll(&self, rng: &mut impl Rng) -> f64 {
        if self.min >= self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

/// Offensive stat a damage type reads; true damage uses the physical stat
pub fn offensive_stat(damage_type: DamageType, attack: f64, magic_attack: f64) -> f64 {
    match damage_type {
        DamageType::Magical => magic_attack,
        DamageType::Physical | DamageType::True => attack,
    }
}

/// Lowest and highest damage a roll can produce
pub fn damage_bounds(attack_stat: f64, damage_pct: f64, variance: DamageVariance) -> (i64, i64) {
    let base = base_damage(attack_stat, damage_pct);
    ((base * variance.min).floor() as i64, (base * variance.max).floor() as i64)
}

/// Roll skill damage: stat x percentage x variance, floored
pub fn roll_damage(
    attack_stat: f64,
    damage_pct: f64,
    variance: DamageVariance,
    rng: &mut impl Rng,
) -> i64 {
    let base = base_damage(attack_stat, damage_pct);
    let (low, high) = damage_bounds(attack_stat, damage_pct, variance);
    ((base * variance.roll(rng)).floor() as i64).max(low).min(high)
}

fn base_damage(attack_stat: f64, damage_pct: f64) -> f64 {
    (attack_stat * damage_pct / 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_damage_within_variance_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let dmg = roll_damage(100.0, 100.0, DamageVariance::default(), &mut rng);
            assert!((90..=110).contains(&dmg), "damage {} out of range", dmg);
        }
    }

    #[test]
    fn test_bounds() {
        assert_eq!(damage_bounds(50.0, 120.0, DamageVariance::default()), (54, 66));
    }

    #[test]
    fn test_fixed_variance() {
        let mut rng = StdRng::seed_from_u64(1);
        let variance = DamageVariance { min: 1.0, max: 1.0 };
        assert_eq!(roll_damage(80.0, 150.0, variance, &mut rng), 120);
    }

    #[test]
    fn test_negative_stat_yields_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(roll_damage(-10.0, 100.0, DamageVariance::default(), &mut rng), 0);
    }

    #[test]
    fn test_offensive_stat_selection() {
        assert_eq!(offensive_stat(DamageType::Magical, 10.0, 40.0), 40.0);
        assert_eq!(offensive_stat(DamageType::Physical, 10.0, 40.0), 10.0);
        assert_eq!(offensive_stat(DamageType::True, 10.0, 40.0), 10.0);
    }

    #[test]
    fn test_variance_validity() {
        assert!(DamageVariance::default().is_valid());
        assert!(!DamageVariance { min: 1.2, max: 1.1 }.is_valid());
        assert!(!DamageVariance { min: 0.0, max: 1.1 }.is_valid());
    }
}
