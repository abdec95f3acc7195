//! Skillcore - Entry Point
//!
//! Small host for the skill core: exports or checks skill data, or runs a
//! short scripted session that logs every skill event.
//!
//! Usage:
//!   skillcore export         write the built-in skills to the data dir
//!   skillcore check [path]   load and validate a skills file
//!   skillcore                run the demo session

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use skillcore::combat::{Cast, Facing, Point, SkillOutcome, SkillRuntime};
use skillcore::config::{CoreConfig, CONFIG_FILE};
use skillcore::data::{export_default_skills, JobId, SkillCatalog, SKILLS_FILE};
use skillcore::events::SkillEvent;
use skillcore::game::{CharacterStats, Clock, ManualClock, TimerQueue};
use skillcore::progression::ProgressionLedger;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Skillcore v{}", env!("CARGO_PKG_VERSION"));

    let config = CoreConfig::load_or_default(Path::new(CONFIG_FILE))
        .with_context(|| format!("loading {}", CONFIG_FILE))?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("export") => {
            let path = export_default_skills(&config.data_dir)?;
            println!("Wrote {}", path.display());
        }
        Some("check") => {
            let path = args
                .get(1)
                .map(PathBuf::from)
                .unwrap_or_else(|| config.data_dir.join(SKILLS_FILE));
            let catalog = SkillCatalog::load(&path)
                .with_context(|| format!("checking {}", path.display()))?;
            println!("{}: {} skills OK", path.display(), catalog.len());
        }
        Some(other) => anyhow::bail!("unknown command `{}` (expected `export` or `check`)", other),
        None => run_demo(&config)?,
    }

    Ok(())
}

/// Scripted session: a level 12 warrior invests SP, attacks, buffs, and
/// waits out the buff
fn run_demo(config: &CoreConfig) -> Result<()> {
    let catalog = Arc::new(SkillCatalog::load_or_default(&config.data_dir)?);
    let (tx, rx) = mpsc::channel();

    let clock = ManualClock::new(0);
    let timers = TimerQueue::new(clock.clone());
    let mut rng = StdRng::from_entropy();

    let mut ledger = ProgressionLedger::with_sink(Arc::clone(&catalog), Box::new(tx.clone()));
    let mut runtime = SkillRuntime::new(Arc::clone(&catalog), clock.clone())
        .with_config(config)
        .with_scheduler(timers.clone())
        .with_sink(Box::new(tx));

    let mut warrior = CharacterStats {
        unassigned_sp: 4,
        attack: 50,
        max_mp: 120,
        current_mp: 120,
        ..CharacterStats::new(JobId::Warrior, 12)
    };

    for skill_id in ["POWER_STRIKE", "POWER_STRIKE", "POWER_STRIKE", "RAGE", "RAGE"] {
        if let Err(reason) = ledger.level_up(&mut warrior, skill_id) {
            log::info!("Cannot level {}: {}", skill_id, reason);
        }
    }
    drain(&rx);

    let cast = Cast::new(Point::new(0.0, 0.0), Facing::Right);
    for skill_id in ["POWER_STRIKE", "POWER_STRIKE", "RAGE", "POWER_STRIKE"] {
        match runtime.use_skill(&mut warrior, &ledger, skill_id, cast, &mut rng) {
            Ok(SkillOutcome::Attack(attack)) => {
                log::info!("{} hits for {} in {:?}", skill_id, attack.damage, attack.hitbox)
            }
            Ok(SkillOutcome::Buff(buff)) => {
                log::info!(
                    "{} grants +{} {} for {} ms",
                    skill_id,
                    buff.value,
                    buff.stat,
                    buff.remaining_ms(clock.now_ms())
                )
            }
            Err(reason) => log::info!("Cannot use {}: {}", skill_id, reason),
        }
        clock.advance(3_000);
    }
    drain(&rx);

    clock.advance(60_000);
    for timer in timers.take_due(clock.now_ms()) {
        runtime.on_timer(&timer);
    }
    runtime.tick();
    drain(&rx);

    let snapshot = ledger.snapshot();
    log::info!("Skill tree: {}", snapshot.to_json()?);
    log::info!("MP left: {}/{}", warrior.current_mp, warrior.max_mp);
    Ok(())
}

fn drain(rx: &Receiver<SkillEvent>) {
    for event in rx.try_iter() {
        log::info!("event: {:?}", event);
    }
}
