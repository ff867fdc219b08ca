use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "cascade.toml";

/// Explorer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Alternative fixture file (default: embedded data set)
    pub fixture: Option<PathBuf>,
    pub dialog: DialogConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Open the explorer dialog immediately (default: false)
    pub open_on_start: bool,
    /// Clear selection and filter when the dialog closes (default: false)
    pub reset_on_close: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level directive: trace, debug, info, warn, error
    pub level: String,
    /// Log file path. The terminal is taken by the UI, so without a file
    /// nothing is logged.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Locations searched, in order, when no explicit path is given:
    /// 1. Current directory
    /// 2. $XDG_CONFIG_HOME/cascade/ (platform config dir)
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("cascade").join(CONFIG_FILE));
        }
        paths
    }

    /// Load from `explicit` if given, else from the first search path that
    /// exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        for path in Self::search_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.fixture.is_none());
        assert!(!config.dialog.open_on_start);
        assert!(!config.dialog.reset_on_close);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[dialog]\nreset_on_close = true\n").unwrap();
        assert!(config.dialog.reset_on_close);
        assert!(!config.dialog.open_on_start);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.fixture = Some(PathBuf::from("fixture.toml"));
        config.logging.file = Some(PathBuf::from("cascade.log"));
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "fixture = \"alt.toml\"\n[dialog]\nopen_on_start = true\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert!(config.dialog.open_on_start);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.fixture, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/cascade.toml"))).is_err());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[dialog]\nreset_on_close = \"maybe\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("parse config"));
    }
}
