//! Startup configuration.
//!
//! UI state is volatile and resets on relaunch; the config file only seeds
//! the defaults the tour starts with.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::Theme;
use crate::{flog_debug, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Theme to start in. Defaults to dark.
    pub theme: Option<Theme>,
    /// Whether the sidebar starts open. Defaults to open.
    pub sidebar_open: Option<bool>,
}

impl Config {
    pub fn finery_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".finery"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::finery_dir()?.join("finery.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        flog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            flog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        flog_debug!(
            "Config loaded: theme={:?}, sidebar_open={:?}",
            config.theme,
            config.sidebar_open
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let finery_dir = Self::finery_dir()?;
        if !finery_dir.exists() {
            fs::create_dir_all(&finery_dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        flog_debug!("Config saved to {}", path.display());
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_store_defaults() {
        let config = Config::default();
        assert_eq!(config.theme(), Theme::Dark);
        assert!(config.sidebar_open());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("finery.toml")).unwrap();
        assert_eq!(config.theme(), Theme::Dark);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = Config {
            theme: Some(Theme::Light),
            sidebar_open: Some(false),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.theme(), Theme::Light);
        assert!(!parsed.sidebar_open());
    }

    #[test]
    fn test_partial_file_parses() {
        let config: Config = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(config.theme(), Theme::Light);
        assert!(config.sidebar_open(), "unset fields keep their defaults");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finery.toml");
        std::fs::write(&path, "theme = \"sepia\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
