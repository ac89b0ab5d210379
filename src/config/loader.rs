//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("config/timeclock.yaml").unwrap();
/// assert_eq!(loader.config().tolerance_minutes, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if the file is
    /// missing, contains invalid YAML, or contains semantically invalid
    /// values (a non-positive premium factor, a negative tolerance, or an
    /// unparseable window time).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<EngineConfig>(path)?;
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("config/timeclock.yaml").unwrap();
        let config = loader.config();
        assert_eq!(config.tolerance_minutes, 10);
        assert_eq!(config.premium_numerator, 8);
        assert_eq!(config.premium_denominator, 7);
    }

    #[test]
    fn test_load_missing_file_is_config_not_found() {
        let err = ConfigLoader::load("config/does-not-exist.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_default_loader_uses_statutory_config() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.config().tolerance_minutes, 10);
        assert_eq!(loader.config().night_window_start, "22:00");
    }
}
