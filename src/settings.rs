use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Merged renderer settings, serialized once per run.
///
/// The default settings file is required and must contain a JSON object.
/// A user settings file, when present, is shallow-merged into the object's
/// `custom` field: user keys win on conflict, default `custom` keys without
/// a user counterpart survive. When no user file exists the default object
/// is used as-is, including any pre-existing `custom` field.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    root: Map<String, Value>,
}

impl Settings {
    /// Loads settings from the default file, merging in the user file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the default file cannot be read, or if either
    /// file is not a valid JSON object.
    pub fn load(default_path: &Path, user_path: &Path) -> Result<Self> {
        let default = read_object(default_path)?;

        let user = if user_path.is_file() {
            Some(read_object(user_path)?)
        } else {
            debug!("No user settings at {}, using defaults as-is", user_path.display());
            None
        };

        let settings = Self::merged(default, user);
        info!("Loaded renderer settings from {}", default_path.display());
        Ok(settings)
    }

    /// Merges an optional user object into the default object's `custom` field.
    #[must_use]
    pub fn merged(mut default: Map<String, Value>, user: Option<Map<String, Value>>) -> Self {
        if let Some(user) = user {
            let mut custom = match default.remove("custom") {
                Some(Value::Object(map)) => map,
                _ => Map::new(),
            };
            custom.extend(user);
            default.insert("custom".to_string(), Value::Object(custom));
        }

        Self { root: default }
    }

    /// Returns the `custom` field, if present.
    #[must_use]
    pub fn custom(&self) -> Option<&Map<String, Value>> {
        self.root.get("custom").and_then(Value::as_object)
    }

    /// Serializes the settings to the compact JSON string passed to the renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_arg_string(&self) -> Result<String> {
        serde_json::to_string(&self.root).map_err(Error::from)
    }
}

/// Reads and parses a JSON object from a file.
fn read_object(path: &Path) -> Result<Map<String, Value>> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| Error::settings(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn object(json: &str) -> Map<String, Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_user_keys_override_default_custom() {
        let default = object(r#"{ "custom": {"x": 1} }"#);
        let user = object(r#"{ "x": 2, "y": 3 }"#);

        let settings = Settings::merged(default, Some(user));
        let custom = settings.custom().unwrap();

        assert_eq!(custom.get("x"), Some(&Value::from(2)));
        assert_eq!(custom.get("y"), Some(&Value::from(3)));
    }

    #[test]
    fn test_default_custom_keys_survive_merge() {
        let default = object(r#"{ "custom": {"theme": "seti", "type": "png"} }"#);
        let user = object(r#"{ "theme": "nord" }"#);

        let settings = Settings::merged(default, Some(user));
        let custom = settings.custom().unwrap();

        assert_eq!(custom.get("theme"), Some(&Value::from("nord")));
        assert_eq!(custom.get("type"), Some(&Value::from("png")));
    }

    #[test]
    fn test_no_user_settings_leaves_custom_untouched() {
        let default = object(r#"{ "custom": {"x": 1}, "start": true }"#);

        let settings = Settings::merged(default.clone(), None);

        assert_eq!(settings.root, default);
    }

    #[test]
    fn test_merge_without_default_custom() {
        let default = object(r#"{ "start": true }"#);
        let user = object(r#"{ "y": 3 }"#);

        let settings = Settings::merged(default, Some(user));
        let custom = settings.custom().unwrap();

        assert_eq!(custom.get("y"), Some(&Value::from(3)));
    }

    #[test]
    fn test_arg_string_is_compact_json() {
        let settings = Settings::merged(object(r#"{ "a": 1 }"#), None);
        assert_eq!(settings.to_arg_string().unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_load_merges_existing_user_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let default = temp.child("default-settings.json");
        default.write_str(r#"{ "custom": {"x": 1} }"#).unwrap();
        let user = temp.child("settings.json");
        user.write_str(r#"{ "x": 2 }"#).unwrap();

        let settings = Settings::load(default.path(), user.path()).unwrap();

        assert_eq!(settings.custom().unwrap().get("x"), Some(&Value::from(2)));
    }

    #[test]
    fn test_load_without_user_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let default = temp.child("default-settings.json");
        default.write_str(r#"{ "custom": {"x": 1} }"#).unwrap();

        let settings =
            Settings::load(default.path(), &temp.path().join("settings.json")).unwrap();

        assert_eq!(settings.custom().unwrap().get("x"), Some(&Value::from(1)));
    }

    #[test]
    fn test_load_malformed_default_is_fatal() {
        let temp = assert_fs::TempDir::new().unwrap();
        let default = temp.child("default-settings.json");
        default.write_str("{ not json").unwrap();

        let result = Settings::load(default.path(), &temp.path().join("settings.json"));

        assert!(result.is_err());
    }

    #[test]
    fn test_load_non_object_root_is_fatal() {
        let temp = assert_fs::TempDir::new().unwrap();
        let default = temp.child("default-settings.json");
        default.write_str("[1, 2, 3]").unwrap();

        let result = Settings::load(default.path(), &temp.path().join("settings.json"));

        assert!(result.is_err());
    }
}
