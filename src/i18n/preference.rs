//! Persisted language preference
//!
//! A single named slot holding the last chosen language code. The resolver
//! reads it once at startup and writes it on every language change.

use crate::core::{Config, Result};
use std::path::{Path, PathBuf};

pub trait PreferenceStore {
    /// Stored language code, if any
    fn load(&self) -> Option<String>;

    fn save(&mut self, code: &str) -> Result<()>;
}

/// In-process preference slot
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: &str) -> Self {
        Self {
            value: Some(code.to_string()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, code: &str) -> Result<()> {
        self.value = Some(code.to_string());
        Ok(())
    }
}

/// Preference kept in the TOML config file under `general.language`
#[derive(Debug, Clone)]
pub struct ConfigPreferenceStore {
    path: PathBuf,
}

impl ConfigPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the default config location
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(Config::config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for ConfigPreferenceStore {
    fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        match Config::load_from(&self.path) {
            Ok(config) => Some(config.general.language),
            Err(e) => {
                log::warn!("Ignoring unreadable config {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&mut self, code: &str) -> Result<()> {
        // A file that does not parse is left untouched
        let mut config = Config::load_from(&self.path)?;
        config.general.language = code.to_string();
        config.save_to(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(store.load(), None);

        store.save("hi").unwrap();
        assert_eq!(store.load().as_deref(), Some("hi"));
    }

    #[test]
    fn test_config_store_missing_file_has_no_preference() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigPreferenceStore::new(dir.path().join("config.toml"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_config_store_round_trip_keeps_other_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nlanguage = \"en\"\ntheme = \"dark\"\n").unwrap();

        let mut store = ConfigPreferenceStore::new(&path);
        store.save("ur").unwrap();

        assert_eq!(store.load().as_deref(), Some("ur"));
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.general.theme, "dark");
    }

    #[test]
    fn test_config_store_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();

        let mut store = ConfigPreferenceStore::new(&path);
        assert_eq!(store.load(), None);

        assert!(store.save("ar").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "not = [valid");
    }

    #[test]
    fn test_config_store_save_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut store = ConfigPreferenceStore::new(&path);
        store.save("tl").unwrap();
        assert_eq!(store.load().as_deref(), Some("tl"));
    }
}
