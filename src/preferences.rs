//! Persisted preferences
//!
//! A string-keyed store saved as a JSON object. Every `set`/`remove` writes
//! the whole file back.

use crate::error::{HelperError, HelperResult};
use crate::resources::{decode_json, encode_json};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Well-known preference keys
pub mod keys {
    // App State
    pub const HAS_SEEN_ONBOARDING: &str = "hasSeenOnboarding";
    pub const IS_FIRST_LAUNCH: &str = "isFirstLaunch";
    pub const LAST_APP_VERSION: &str = "lastAppVersion";
    pub const LAST_BUILD_NUMBER: &str = "lastBuildNumber";
    pub const LAST_LAUNCH_DATE: &str = "lastLaunchDate";
    pub const LAST_OPENED_TAB: &str = "lastOpenedTab";
    pub const LAST_UPDATE_CHECK: &str = "lastUpdateCheck";
    pub const LAUNCH_COUNT: &str = "launchCount";
    pub const SAVED_SEARCH_FILTERS: &str = "savedSearchFilters";

    // Feature Flags
    pub const ENABLE_ALPHA_FEATURES: &str = "enableAlphaFeatures";
    pub const ENABLE_BETA_FEATURES: &str = "enableBetaFeatures";
    pub const ENABLE_DEBUG_MODE: &str = "enableDebugMode";
    pub const ENABLE_DEMO_MODE: &str = "enableDemoMode";
    pub const ENABLE_TESTING_MODE: &str = "enableTestingMode";

    // User Authentication
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const LAST_LOGIN_DATE: &str = "lastLoginDate";
    pub const SESSION_TOKEN: &str = "sessionToken";

    // User Preferences
    pub const APPEARANCE_MODE: &str = "appearanceMode";
    pub const AUTO_LOGIN: &str = "autoLogin";
    pub const BROWSER: &str = "browser";
    pub const LANGUAGE: &str = "language";
    pub const NOTIFICATIONS_ENABLED: &str = "notificationsEnabled";

    // User Profile
    pub const EMAIL: &str = "email";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const USERNAME: &str = "username";
}

/// File-backed key/value preferences
#[derive(Debug)]
pub struct Preferences {
    path: PathBuf,
    values: Map<String, Value>,
}

impl Preferences {
    /// Load the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> HelperResult<Self> {
        let path = path.into();

        let values = if path.exists() {
            match decode_json::<Value>(&path)? {
                Value::Object(map) => map,
                other => {
                    return Err(HelperError::Config(format!(
                        "{} holds {} instead of an object",
                        path.display(),
                        json_kind(&other)
                    )))
                }
            }
        } else {
            Map::new()
        };

        info!("Loaded {} preference(s) from {}", values.len(), path.display());
        Ok(Self { path, values })
    }

    /// Open the store at [`default_path`]
    pub fn open_default() -> HelperResult<Self> {
        Self::open(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Typed read; `None` when missing or stored as a different type
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(typed) => Some(typed),
            Err(e) => {
                debug!("Preference '{}' has unexpected type: {}", key, e);
                None
            }
        }
    }

    /// Stored boolean, `false` when missing
    pub fn bool(&self, key: &str) -> bool {
        self.values.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.values.get(key).and_then(Value::as_str).map(str::to_string)
    }

    /// Store `value` under `key` and persist
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> HelperResult<()> {
        let value = serde_json::to_value(value)?;
        self.values.insert(key.to_string(), value);
        self.save()
    }

    /// Drop `key` and persist. Returns whether it was present.
    pub fn remove(&mut self, key: &str) -> HelperResult<bool> {
        let existed = self.values.remove(key).is_some();
        if existed {
            self.save()?;
        }
        Ok(existed)
    }

    fn save(&self) -> HelperResult<()> {
        encode_json(&self.values, &self.path)
    }
}

/// `<config dir>/foundation-helpers/preferences.json`
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("foundation-helpers")
        .join("preferences.json")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let prefs = Preferences::open(dir.path().join("prefs.json")).expect("Failed to open");

        assert!(!prefs.contains(keys::LAUNCH_COUNT));
        assert!(!prefs.bool(keys::IS_LOGGED_IN));
        assert_eq!(prefs.get::<u32>(keys::LAUNCH_COUNT), None);
    }

    #[test]
    fn test_set_and_get_typed() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut prefs = Preferences::open(dir.path().join("prefs.json")).expect("Failed to open");

        prefs.set(keys::LAUNCH_COUNT, &3u32).unwrap();
        prefs.set(keys::USERNAME, "tux").unwrap();
        prefs.set(keys::SAVED_SEARCH_FILTERS, &vec!["recent", "starred"]).unwrap();

        assert_eq!(prefs.get::<u32>(keys::LAUNCH_COUNT), Some(3));
        assert_eq!(prefs.string(keys::USERNAME).as_deref(), Some("tux"));
        assert_eq!(
            prefs.get::<Vec<String>>(keys::SAVED_SEARCH_FILTERS),
            Some(vec!["recent".to_string(), "starred".to_string()])
        );
        // Wrong type reads as absent
        assert_eq!(prefs.get::<bool>(keys::USERNAME), None);
    }

    #[test]
    fn test_values_persist_across_opens() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested/prefs.json");

        let mut prefs = Preferences::open(&path).expect("Failed to open");
        prefs.set(keys::HAS_SEEN_ONBOARDING, &true).unwrap();
        prefs.set(keys::LANGUAGE, "fi").unwrap();
        assert!(prefs.remove(keys::LANGUAGE).unwrap());
        assert!(!prefs.remove(keys::LANGUAGE).unwrap());

        let reopened = Preferences::open(&path).expect("Failed to reopen");
        assert!(reopened.bool(keys::HAS_SEEN_ONBOARDING));
        assert!(!reopened.contains(keys::LANGUAGE));
    }

    #[test]
    fn test_non_object_file_is_rejected() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let result = Preferences::open(&path);
        assert!(matches!(result, Err(HelperError::Config(_))));
    }

    #[test]
    fn test_default_path() {
        assert!(default_path().ends_with("foundation-helpers/preferences.json"));
    }
}
