//! Core configuration
//!
//! Read from `skillcore.ron`. Every field has a default, so a missing file
//! or a partial one is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::combat::DamageVariance;
use crate::error::ConfigError;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "skillcore.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Random multiplier range applied to skill damage
    pub damage_variance: DamageVariance,
    /// Directory holding `skills.ron`
    pub data_dir: PathBuf,
    /// Overrides the platform save directory
    pub save_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            damage_variance: DamageVariance::default(),
            data_dir: PathBuf::from("assets/data"),
            save_dir: None,
        }
    }
}

impl CoreConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: CoreConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config file if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("{} not found, using default config", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.damage_variance.is_valid() {
            return Err(ConfigError::InvalidVariance {
                min: self.damage_variance.min,
                max: self.damage_variance.max,
            });
        }
        Ok(())
    }

    /// Where skill tree snapshots are written
    pub fn save_directory(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(crate::save::save_directory)
    }
}
