//! Combat-side skill state
//!
//! Buffs, hit geometry, outgoing damage and the per-character runtime that
//! ties them together.

pub mod buffs;
pub mod damage;
pub mod hitbox;
pub mod runtime;

pub use buffs::{ActiveBuff, BuffSet, BuffTimer};
pub use damage::{damage_bounds, offensive_stat, roll_damage, DamageVariance};
pub use hitbox::{directed_knockback, hit_rect, Facing, Point, Rect};
pub use runtime::{AttackProposal, Cast, SkillOutcome, SkillRuntime};
