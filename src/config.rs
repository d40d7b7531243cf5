use crate::error::{HelperError, HelperResult};
use crate::utils::date::DEFAULT_DATE_FORMAT;
use crate::utils::fuzzy::DEFAULT_MAX_DISTANCE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Defaults for the command-line tool and for callers that want a shared
/// place to keep helper settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Matching
    pub max_distance: usize,
    pub ranked_limit: usize,

    // Formatting
    pub date_format: String,

    // Storage
    pub preferences_path: String,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            ranked_limit: 5,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            preferences_path: crate::preferences::default_path()
                .to_string_lossy()
                .to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or defaults if absent
    pub fn load() -> HelperResult<Self> {
        Self::load_from(config_path())
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load_from(path: impl AsRef<Path>) -> HelperResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> HelperResult<()> {
        self.save_to(config_path())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> HelperResult<()> {
        crate::resources::encode_json(self, path)
    }

    /// Log level as understood by `tracing`
    pub fn level(&self) -> HelperResult<tracing::Level> {
        self.log_level
            .parse()
            .map_err(|_| HelperError::Config(format!("unknown log level '{}'", self.log_level)))
    }

    fn validate(&self) -> HelperResult<()> {
        self.level()?;
        if self.ranked_limit == 0 {
            return Err(HelperError::Config("ranked_limit must be at least 1".into()));
        }
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("foundation-helpers")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_distance, 2);
        assert_eq!(config.ranked_limit, 5);
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(config.level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(dir.path().join("config.json")).expect("Failed to load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "max_distance": 4, "log_level": "debug" }"#).unwrap();

        let config = Config::load_from(&path).expect("Failed to load");
        assert_eq!(config.max_distance, 4);
        assert_eq!(config.ranked_limit, 5);
        assert_eq!(config.level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        let config = Config {
            max_distance: 1,
            ..Config::default()
        };

        config.save_to(&path).expect("Failed to save");
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        assert!(matches!(Config::load_from(&path), Err(HelperError::Json(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");

        std::fs::write(&path, r#"{ "log_level": "LOUD" }"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(HelperError::Config(_))));

        std::fs::write(&path, r#"{ "ranked_limit": 0 }"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(HelperError::Config(_))));
    }
}
