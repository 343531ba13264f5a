use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::ConfigError;
use crate::models::settings::Config;

const CONFIG_FILE: &str = "config.toml";

/// Reads and writes the configuration file at a fixed path
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for `config.toml` in the platform configuration directory
    pub fn at_default_location() -> Result<Self, ConfigError> {
        Self::default_path()
            .map(Self::new)
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Platform configuration path, e.g. `~/.config/date-template/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Ken24T", "date-template")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration.
    ///
    /// A missing file yields the defaults.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            log::debug!("No config at {:?}, using defaults", self.path);
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ConfigError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: self.path.clone(),
            source: e,
        })?;

        config
            .render
            .validate()
            .map_err(ConfigError::validation)?;

        log::debug!(
            "Loaded config from {:?} ({} template pieces)",
            self.path,
            config.template.len()
        );
        Ok(config)
    }

    /// Validate and write `config`, creating parent directories as needed
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config
            .render
            .validate()
            .map_err(ConfigError::validation)?;

        let content = toml::to_string_pretty(config)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(&self.path, content).map_err(|e| ConfigError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        log::debug!("Saved config to {:?}", self.path);
        Ok(())
    }

    /// Overwrite the file with the default configuration
    pub fn reset(&self) -> Result<(), ConfigError> {
        self.save(&Config::default())
    }
}
