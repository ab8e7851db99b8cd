//! Config file location and persistence.

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration storage errors.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("no platform config directory available")]
    ConfigDirNotFound,
    #[error("config file io: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Where a loaded [`AppConfig`] came from.
#[derive(Debug)]
pub enum ConfigSource {
    /// Parsed from the file at this path.
    File(PathBuf),
    /// No file existed; defaults were written here.
    Created(PathBuf),
    /// The file did not parse. Defaults are in use and the file is untouched.
    Fallback {
        /// The malformed file.
        path: PathBuf,
        /// Why it did not parse.
        error: toml::de::Error,
    },
}

impl ConfigSource {
    /// Path of the config file that was consulted.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::File(path) | Self::Created(path) | Self::Fallback { path, .. } => path,
        }
    }

    /// Reports the outcome. Call once a subscriber is installed.
    pub fn log(&self) {
        match self {
            Self::File(path) => debug!(path = %path.display(), "Config loaded"),
            Self::Created(path) => info!(path = %path.display(), "Wrote default config"),
            Self::Fallback { path, error } => warn!(
                path = %path.display(),
                error = %error,
                "Config file is malformed, using defaults"
            ),
        }
    }
}

/// Reads and writes `config.toml` in the uitour config directory.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` when the platform has no config directory.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Uses `path` instead of the platform config directory.
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Directory holding `config.toml`.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }

    /// Loads `config.toml`, or the file at `path_override`.
    ///
    /// A missing file is created with defaults. A malformed one yields defaults
    /// and a [`ConfigSource::Fallback`] carrying the parse error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file cannot be read or the default cannot be written.
    pub fn load_config(
        &self,
        path_override: Option<&Path>,
    ) -> Result<(AppConfig, ConfigSource), ConfigError> {
        let path = match path_override {
            Some(path) => path.to_path_buf(),
            None => {
                self.ensure_config_dir()?;
                self.config_dir.join(CONFIG_FILE_NAME)
            }
        };

        if !path.exists() {
            let config = AppConfig::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            write_atomic(&path, &toml::to_string_pretty(&config)?)?;
            return Ok((config, ConfigSource::Created(path)));
        }

        let content = fs::read_to_string(&path)?;
        Ok(match toml::from_str::<AppConfig>(&content) {
            Ok(config) => (config, ConfigSource::File(path)),
            Err(error) => (AppConfig::default(), ConfigSource::Fallback { path, error }),
        })
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<(), ConfigError> {
    let dir = path
        .parent()
        .ok_or_else(|| std::io::Error::other("config path has no parent"))?;
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_config_dir_creates_directory() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("uitour");
        let manager = StorageManager::with_dir(config_path.clone());

        assert!(!config_path.exists());
        manager.ensure_config_dir().unwrap();
        assert!(config_path.exists());
    }

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let (config, source) = manager.load_config(None).unwrap();
        assert!(config.ui.enable_animations);
        assert!(matches!(source, ConfigSource::Created(_)));

        let config_file = dir.path().join(CONFIG_FILE_NAME);
        assert!(config_file.exists());

        let written: AppConfig = toml::from_str(&fs::read_to_string(config_file).unwrap()).unwrap();
        assert_eq!(written.profile.name, config.profile.name);
    }

    #[test]
    fn test_malformed_file_falls_back_and_reports_error() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "invalid_toml = [").unwrap();

        let (config, source) = manager.load_config(None).unwrap();
        assert!(config.ui.enable_animations);
        assert_eq!(source.path(), config_file);
        assert!(
            matches!(&source, ConfigSource::Fallback { error, .. } if !error.to_string().is_empty()),
            "{source:?}"
        );

        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "invalid_toml = [");
    }

    #[test]
    fn test_load_config_from_override_path() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");

        fs::write(&custom, "log_level = \"warn\"\n").unwrap();

        let (config, source) = manager.load_config(Some(&custom)).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(matches!(source, ConfigSource::File(ref path) if *path == custom));
        assert!(!dir.path().join("unused").exists());
    }
}
