//! Save/load system
//!
//! Handles skill tree snapshots on disk.

pub mod snapshot;

pub use snapshot::{
    SkillTreeSnapshot, SNAPSHOT_VERSION,
    save_snapshot, load_snapshot, delete_snapshot,
    snapshot_exists, snapshot_path, save_directory,
};
