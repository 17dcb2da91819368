//! Configuration File Loading
//!
//! Loads TOML configuration from an explicit path or the default location,
//! falling back to defaults when no file exists. Parse and validation
//! failures are reported, not papered over; only a missing file is
//! silently replaced by defaults.

use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{Error, Result};

/// Directory under the platform config root that holds our files
const CONFIG_DIR_NAME: &str = "batteries-console";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration file loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the default location, or defaults if no file exists
    pub fn load() -> Result<Config> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            Some(path) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
            None => {
                warn!("could not determine config directory, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Load and validate a specific configuration file
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| Error::ConfigParseFailed {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Save a configuration as TOML, creating parent directories
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            })?;

        fs::write(path, contents).map_err(|e| Error::ConfigSaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Default configuration file path for this platform
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
