//! Application configuration
//!
//! Read once at startup from `<config_dir>/photofinder/config.json`.
//! Every field is optional; a missing file means defaults.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable that overrides the library root
pub const LIBRARY_ENV: &str = "PHOTOFINDER_LIBRARY";

/// Number of assets fetched on mount
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory treated as the device photo library
    pub library_root: Option<PathBuf>,
    /// How many assets to request on mount
    pub page_size: usize,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            library_root: None,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "info".to_string(),
            window_width: 480.0,
            window_height: 860.0,
        }
    }
}

impl AppConfig {
    /// Load the configuration from the standard location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Apply overrides from the environment
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(root) = std::env::var_os(LIBRARY_ENV) {
            self.library_root = Some(PathBuf::from(root));
        }
        self
    }

    /// Path of the configuration file, if a config directory exists
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("photofinder");
        path.push("config.json");
        Some(path)
    }

    /// Read a configuration file. A missing file yields defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        Self::from_json(&json).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The library root to scan, falling back to the user's Pictures folder
    pub fn library_root(&self) -> PathBuf {
        if let Some(root) = &self.library_root {
            return root.clone();
        }

        dirs::picture_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
            .unwrap_or_else(|| PathBuf::from("Pictures"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 100);
        assert_eq!(config.log_level, "info");
        assert!(config.library_root.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "page_size": 24 }"#).unwrap();
        assert_eq!(config.page_size, 24);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.window_width, 480.0);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_env_overrides_library_root() {
        std::env::set_var(LIBRARY_ENV, "/mnt/camera-roll");
        let config = AppConfig {
            library_root: Some(PathBuf::from("/srv/photos")),
            ..AppConfig::default()
        }
        .with_env_overrides();
        std::env::remove_var(LIBRARY_ENV);

        assert_eq!(config.library_root(), PathBuf::from("/mnt/camera-roll"));
    }

    #[test]
    fn test_explicit_library_root() {
        let config = AppConfig {
            library_root: Some(PathBuf::from("/srv/photos")),
            ..AppConfig::default()
        };
        assert_eq!(config.library_root(), PathBuf::from("/srv/photos"));
    }
}
