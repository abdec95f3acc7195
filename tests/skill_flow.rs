//! End-to-end skill flows across the ledger, runtime and persistence

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use skillcore::combat::{
    damage_bounds, Cast, DamageVariance, Facing, Point, SkillOutcome, SkillRuntime,
};
use skillcore::data::{export_default_skills, JobId, SkillCatalog, Stat};
use skillcore::error::Denied;
use skillcore::events::SkillEvent;
use skillcore::game::{CharacterStats, Clock, ManualClock, TimerQueue};
use skillcore::progression::ProgressionLedger;
use skillcore::save::{load_snapshot, save_snapshot};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("skillcore-it-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn default_catalog() -> Arc<SkillCatalog> {
    Arc::new(SkillCatalog::with_defaults().unwrap())
}

#[test]
fn test_power_strike_end_to_end() {
    let catalog = default_catalog();
    let clock = ManualClock::new(10_000);
    let mut ledger = ProgressionLedger::new(Arc::clone(&catalog));
    let mut runtime = SkillRuntime::new(Arc::clone(&catalog), clock.clone());
    let mut rng = StdRng::seed_from_u64(42);

    let mut warrior = CharacterStats {
        unassigned_sp: 3,
        attack: 50,
        ..CharacterStats::new(JobId::Warrior, 12)
    };

    for _ in 0..3 {
        ledger.level_up(&mut warrior, "POWER_STRIKE").unwrap();
    }
    assert_eq!(ledger.level("POWER_STRIKE"), 3);
    assert_eq!(warrior.unassigned_sp, 0);

    assert!(runtime.can_use(&warrior, &ledger, "POWER_STRIKE").is_ok());

    let stats = ledger.effective_stats("POWER_STRIKE").unwrap();
    let (low, high) = damage_bounds(50.0, stats.damage, DamageVariance::default());
    let mp_before = warrior.current_mp;

    let outcome = runtime
        .use_skill(&mut warrior, &ledger, "POWER_STRIKE", Cast::default(), &mut rng)
        .unwrap();
    let damage = outcome.damage().unwrap();
    assert!(damage >= low && damage <= high, "damage {} outside {}..={}", damage, low, high);
    assert_eq!(warrior.current_mp, mp_before - stats.mp_cost);
    assert_eq!(runtime.cooldown_remaining("POWER_STRIKE"), 3_000);

    let denied = runtime
        .use_skill(&mut warrior, &ledger, "POWER_STRIKE", Cast::default(), &mut rng)
        .unwrap_err();
    assert!(matches!(denied, Denied::OnCooldown { .. }));
    assert_eq!(denied.to_string(), "Cooldown: 3s");
    assert_eq!(warrior.current_mp, mp_before - stats.mp_cost);

    clock.advance(3_000);
    assert!(runtime.can_use(&warrior, &ledger, "POWER_STRIKE").is_ok());
}

#[test]
fn test_prerequisite_chain_through_ledger() {
    let mut ledger = ProgressionLedger::new(default_catalog());
    let mut warrior = CharacterStats {
        unassigned_sp: 10,
        ..CharacterStats::new(JobId::Warrior, 20)
    };

    assert_eq!(
        ledger.level_up(&mut warrior, "SLASH_BLAST").unwrap_err().to_string(),
        "Requires Power Strike Lv.1"
    );
    ledger.level_up(&mut warrior, "POWER_STRIKE").unwrap();
    ledger.level_up(&mut warrior, "SLASH_BLAST").unwrap();

    assert_eq!(ledger.total_sp_invested(), 2);
    assert_eq!(warrior.unassigned_sp, 8);
    assert_eq!(ledger.reset_all(&mut warrior), 2);
    assert_eq!(warrior.unassigned_sp, 10);
    assert_eq!(ledger.level("POWER_STRIKE"), 0);
}

#[test]
fn test_buff_lifecycle_with_timer_queue() {
    let catalog = default_catalog();
    let clock = ManualClock::new(0);
    let timers = TimerQueue::new(clock.clone());
    let (tx, rx) = mpsc::channel();
    let mut runtime = SkillRuntime::new(Arc::clone(&catalog), clock.clone())
        .with_scheduler(timers.clone())
        .with_sink(Box::new(tx));
    let mut ledger = ProgressionLedger::new(Arc::clone(&catalog));
    let mut rng = StdRng::seed_from_u64(1);
    let mut warrior = CharacterStats {
        unassigned_sp: 1,
        current_mp: 200,
        max_mp: 200,
        ..CharacterStats::new(JobId::Warrior, 12)
    };
    ledger.level_up(&mut warrior, "RAGE").unwrap();

    let outcome = runtime
        .use_skill(&mut warrior, &ledger, "RAGE", Cast::default(), &mut rng)
        .unwrap();
    let buff = match outcome {
        SkillOutcome::Buff(buff) => buff,
        other => panic!("expected a buff, got {:?}", other),
    };
    assert_eq!(runtime.buff_bonus(Stat::Atk), buff.value);
    assert_eq!(timers.len(), 1);

    clock.advance(buff.expires_at);
    for timer in timers.take_due(clock.now_ms()) {
        assert!(runtime.on_timer(&timer).is_some());
    }
    assert_eq!(runtime.buff_bonus(Stat::Atk), 0.0);
    assert!(runtime.active_buffs().is_empty());

    let events: Vec<SkillEvent> = rx.try_iter().collect();
    assert!(matches!(events[0], SkillEvent::BuffApplied(_)));
    assert!(matches!(events[1], SkillEvent::SkillUsed { .. }));
    assert!(matches!(events[2], SkillEvent::BuffExpired(_)));
}

#[test]
fn test_snapshot_on_disk_reproduces_ledger() {
    let catalog = default_catalog();
    let dir = scratch_dir("snapshot");
    let mut mage = CharacterStats { unassigned_sp: 6, ..CharacterStats::new(JobId::Mage, 20) };

    let mut ledger = ProgressionLedger::new(Arc::clone(&catalog));
    for skill_id in ["MAGIC_BOLT", "MAGIC_BOLT", "FIRE_ARROW", "TELEPORT"] {
        ledger.level_up(&mut mage, skill_id).unwrap();
    }

    save_snapshot(&ledger.snapshot(), &dir, 1).unwrap();
    let mut restored = ProgressionLedger::new(catalog);
    let report = restored.restore(&load_snapshot(&dir, 1).unwrap());
    assert_eq!((report.skills, report.sp_discarded), (3, 0));

    assert_eq!(restored.levels(), ledger.levels());
    assert_eq!(restored.total_sp_invested(), 4);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_exported_skills_load_back() {
    let dir = scratch_dir("export");
    let path = export_default_skills(&dir).unwrap();

    let loaded = SkillCatalog::load(&path).unwrap();
    let builtin = SkillCatalog::with_defaults().unwrap();
    assert_eq!(loaded.definitions(), builtin.definitions());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_hit_area_mirrors_with_facing() {
    let catalog = default_catalog();
    let clock = ManualClock::new(0);
    let mut runtime = SkillRuntime::new(catalog, clock.clone());
    let ledger: HashMap<String, u32> = HashMap::new();
    let mut rng = StdRng::seed_from_u64(9);
    let mut warrior = CharacterStats::new(JobId::Warrior, 12);
    let caster = Point::new(400.0, 300.0);

    let facing_right = Cast::new(caster, Facing::Right);
    let right = runtime
        .use_skill(&mut warrior, &ledger, "POWER_STRIKE", facing_right, &mut rng)
        .unwrap()
        .hitbox()
        .unwrap();
    clock.advance(3_000);
    let facing_left = Cast::new(caster, Facing::Left);
    let left = runtime
        .use_skill(&mut warrior, &ledger, "POWER_STRIKE", facing_left, &mut rng)
        .unwrap()
        .hitbox()
        .unwrap();

    assert!(right.x >= caster.x);
    assert!(left.right() <= caster.x);
    assert_eq!(right.width, left.width);
    assert_eq!(right.y, left.y);
}
