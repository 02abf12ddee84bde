//! Loading and saving `settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::AppSettings;

/// Directory name under the user configuration directory
const APP_DIR_NAME: &str = "duopane";

/// Settings file name
const SETTINGS_FILE: &str = "settings.toml";

/// Reads and writes application settings in TOML format.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `$XDG_CONFIG_HOME/duopane`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if no configuration directory
    /// is known for the current user.
    pub fn new() -> ConfigResult<Self> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join(APP_DIR_NAME)))
    }

    /// Creates a manager rooted at an explicit directory.
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Returns the configuration directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the full path of the settings file.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings, returning defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        let path = self.settings_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                return Ok(AppSettings::default());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        let settings = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Writes settings, creating the directory if needed.
    ///
    /// The file is written to a temporary sibling first and renamed into
    /// place.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn save_settings(&self, settings: &AppSettings) -> ConfigResult<()> {
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })?;

        let content = toml::to_string_pretty(settings)?;
        let path = self.settings_path();
        let tmp_path = path.with_extension("toml.tmp");

        fs::write(&tmp_path, content).map_err(|source| ConfigError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Saved settings");
        Ok(())
    }
}
