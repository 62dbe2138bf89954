//! Roster config file on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::app_config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory for rosterdeck on this platform")]
    ConfigDirNotFound,
    #[error("config file io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Reads `config.toml` from the rosterdeck config directory, seeding it with
/// defaults on first run.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` when the platform has no home directory.
    pub fn new() -> Result<Self, ConfigError> {
        AppConfig::default_config_dir()
            .map(Self::with_dir)
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    #[must_use]
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> Result<(), ConfigError> {
        if !self.config_dir.exists() {
            info!(path = %self.config_dir.display(), "Creating config directory");
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Loads the roster config, from `path_override` when given.
    ///
    /// A missing file is written with defaults. A file that does not parse is
    /// left as it is and defaults are used for this run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let config_path = match path_override {
            Some(path) => path.to_path_buf(),
            None => {
                self.ensure_config_dir()?;
                self.config_dir.join(CONFIG_FILE_NAME)
            }
        };

        if !config_path.exists() {
            info!(path = %config_path.display(), "No config file, writing defaults");
            let defaults = AppConfig::default();
            write_atomically(&config_path, &toml::to_string_pretty(&defaults)?)?;
            return Ok(defaults);
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(toml::from_str::<AppConfig>(&content).unwrap_or_else(|e| {
            warn!(path = %config_path.display(), error = %e, "Invalid config file, using defaults");
            AppConfig::default()
        }))
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
