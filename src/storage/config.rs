//! Configuration handling for Fleetdesk
//!
//! Configuration is stored in `~/.config/fleetdesk/config.toml` (or the
//! platform equivalent). Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Data file used when neither `--data` nor the config names one
pub const DEFAULT_DATA_FILE: &str = "transport_data.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Path of the dataset file; relative paths resolve against the config file's directory
    pub data_file: Option<PathBuf>,

    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Where this config was loaded from, if anywhere
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        if let Some(data_file) = &config.data_file {
            if data_file.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("data_file must not be empty".into()).into());
            }
        }

        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Returns the config directory for this user
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "fleetdesk", "fleetdesk").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the default config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Picks the dataset file: explicit override, then config, then the default name
    pub fn resolve_data_file(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        match (&self.data_file, &self.source) {
            (Some(file), Some(source)) if file.is_relative() => source
                .parent()
                .map(|dir| dir.join(file))
                .unwrap_or_else(|| file.clone()),
            (Some(file), _) => file.clone(),
            (None, _) => PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.resolve_data_file(None), PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn parse_config() {
        let toml = r#"
data_file = "/srv/fleet/data.json"
default_format = "json"
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(
            config.resolve_data_file(None),
            PathBuf::from("/srv/fleet/data.json")
        );
    }

    #[test]
    fn explicit_path_wins() {
        let config = Config {
            data_file: Some("configured.json".into()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_data_file(Some(Path::new("cli.json"))),
            PathBuf::from("cli.json")
        );
    }

    #[test]
    fn relative_data_file_resolves_next_to_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_file = \"fleet.json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.resolve_data_file(None), dir.path().join("fleet.json"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_format = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
