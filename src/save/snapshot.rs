//! Skill tree snapshots
//!
//! Persists invested skill levels as JSON, one file per character slot.
//! Cooldowns and buffs are combat state and are never saved.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SaveError;

/// Snapshot format version for compatibility checking
pub const SNAPSHOT_VERSION: u32 = 1;

/// Invested skill levels, keyed by skill id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTreeSnapshot {
    pub version: u32,
    pub skill_levels: BTreeMap<String, u32>,
}

impl Default for SkillTreeSnapshot {
    fn default() -> Self {
        Self { version: SNAPSHOT_VERSION, skill_levels: BTreeMap::new() }
    }
}

impl SkillTreeSnapshot {
    /// Build a snapshot, omitting zero-level entries
    pub fn new(mut skill_levels: BTreeMap<String, u32>) -> Self {
        skill_levels.retain(|_, level| *level > 0);
        Self { version: SNAPSHOT_VERSION, skill_levels }
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot, rejecting other format versions
    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        let snapshot: SkillTreeSnapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SaveError::VersionMismatch {
                expected: SNAPSHOT_VERSION,
                found: snapshot.version,
            });
        }
        Ok(snapshot)
    }

    pub fn total_levels(&self) -> u32 {
        self.skill_levels.values().sum()
    }
}

/// Platform save directory
pub fn save_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "skillcore", "SkillCore") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("skills");
        path
    } else {
        PathBuf::from("./saves")
    }
}

/// Path of a character slot's snapshot inside `dir`
pub fn snapshot_path(dir: &Path, slot: u8) -> PathBuf {
    dir.join(format!("skills_{}.json", slot))
}

pub fn save_snapshot(
    snapshot: &SkillTreeSnapshot,
    dir: &Path,
    slot: u8,
) -> Result<PathBuf, SaveError> {
    fs::create_dir_all(dir).map_err(|source| SaveError::Io { path: dir.to_path_buf(), source })?;

    let path = snapshot_path(dir, slot);
    fs::write(&path, snapshot.to_json()?).map_err(|source| SaveError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!("Skill tree saved to slot {} ({} skills)", slot, snapshot.skill_levels.len());
    Ok(path)
}

pub fn load_snapshot(dir: &Path, slot: u8) -> Result<SkillTreeSnapshot, SaveError> {
    let path = snapshot_path(dir, slot);
    let json = fs::read_to_string(&path).map_err(|source| SaveError::Io {
        path: path.clone(),
        source,
    })?;
    let snapshot = SkillTreeSnapshot::from_json(&json)?;

    log::info!("Skill tree loaded from slot {}", slot);
    Ok(snapshot)
}

pub fn snapshot_exists(dir: &Path, slot: u8) -> bool {
    snapshot_path(dir, slot).exists()
}

pub fn delete_snapshot(dir: &Path, slot: u8) -> Result<(), SaveError> {
    let path = snapshot_path(dir, slot);
    if path.exists() {
        fs::remove_file(&path).map_err(|source| SaveError::Io { path: path.clone(), source })?;
        log::info!("Deleted skill tree slot {}", slot);
    }
    Ok(())
}
