//! RON data loader
//!
//! Loads the skill catalog from `skills.ron`, with fallback to the built-in
//! skill set when no file is present. A file that exists but is malformed
//! or fails validation is an error, never silently replaced.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CatalogError;

use super::catalog::SkillCatalog;
use super::skills::{default_skills, SkillDefinition};

/// File name of the skill table inside the data directory
pub const SKILLS_FILE: &str = "skills.ron";

impl SkillCatalog {
    /// Load and validate a catalog from a RON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let skills: Vec<SkillDefinition> =
            ron::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_definitions(skills)?;
        log::info!("Loaded {} skills from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load `skills.ron` from a data directory, or the built-in skills if it is absent
    pub fn load_or_default(data_dir: &Path) -> Result<Self, CatalogError> {
        let path = data_dir.join(SKILLS_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            log::warn!("{} not found, using built-in skills", path.display());
            Self::with_defaults()
        }
    }

    /// Serialize the catalog's definitions as pretty RON
    pub fn to_ron(&self) -> Result<String, CatalogError> {
        Ok(ron::ser::to_string_pretty(self.definitions(), ron::ser::PrettyConfig::default())?)
    }
}

/// Export the built-in skills to `skills.ron` for easy editing
pub fn export_default_skills(data_dir: &Path) -> Result<PathBuf, CatalogError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| CatalogError::Io { path, source }
    };

    fs::create_dir_all(data_dir).map_err(io_err(data_dir))?;

    let skills_ron =
        ron::ser::to_string_pretty(&default_skills(), ron::ser::PrettyConfig::default())?;
    let path = data_dir.join(SKILLS_FILE);
    fs::write(&path, skills_ron).map_err(io_err(&path))?;

    log::info!("Exported default skills to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("skillcore-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_export_then_load() {
        let dir = scratch_dir("export");
        let path = export_default_skills(&dir).unwrap();
        assert!(path.exists(), "skills.ron not created");

        let catalog = SkillCatalog::load(&path).unwrap();
        assert_eq!(catalog.definitions(), default_skills().as_slice());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = scratch_dir("missing");
        let catalog = SkillCatalog::load_or_default(&dir).unwrap();
        assert_eq!(catalog.len(), default_skills().len());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SKILLS_FILE), "[ (id: ").unwrap();

        let err = SkillCatalog::load_or_default(&dir).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_to_ron_round_trip() {
        let catalog = SkillCatalog::with_defaults().unwrap();
        let text = catalog.to_ron().unwrap();
        let skills: Vec<SkillDefinition> = ron::from_str(&text).unwrap();
        assert_eq!(skills.len(), catalog.len());
    }
}
