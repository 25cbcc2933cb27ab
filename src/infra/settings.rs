//! Usage: Persisted key-value settings store (`settings.json` + typed get/set helpers).

use crate::app_paths;
use crate::shared::fs::{read_optional_to_string, write_file_atomic};
use crate::shared::mutex_ext::MutexExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod keys {
    pub const DAEMON_ADDRESS: &str = "daemon_address";
    pub const DAEMON_PORT: &str = "daemon_port";
    pub const DAEMON_SSL_ENABLED: &str = "daemon_ssl_enabled";
    pub const START_IN_TRAY: &str = "start_in_tray";
}

pub const DEFAULT_DAEMON_ADDRESS: &str = "localhost";
pub const DEFAULT_DAEMON_PORT: u16 = 11987;
pub const DEFAULT_DAEMON_SSL_ENABLED: bool = false;
pub const DEFAULT_START_IN_TRAY: bool = false;

pub struct SettingsStore {
    path: Option<PathBuf>,
    values: Mutex<Map<String, Value>>,
}

fn parse_settings_json(content: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(content)
        .map_err(|e| format!("failed to parse settings.json: {e}"))?
    {
        Value::Object(map) => Ok(map),
        other => Err(format!(
            "invalid settings.json: expected an object, got {}",
            json_kind(&other)
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl SettingsStore {
    /// Opens the store backed by `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_optional_to_string(&path).and_then(|content| match content {
            Some(content) => parse_settings_json(&content),
            None => Ok(Map::new()),
        }) {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!(path = %path.display(), "settings unreadable, starting empty: {}", err);
                Map::new()
            }
        };

        tracing::debug!(path = %path.display(), keys = values.len(), "settings store opened");
        Self {
            path: Some(path),
            values: Mutex::new(values),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: Mutex::new(Map::new()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.lock_or_recover().contains_key(key)
    }

    /// Typed read; a missing key or a value of another type yields `default`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = self.values.lock_or_recover().get(key).cloned();
        let Some(raw) = raw else {
            return default;
        };

        match serde_json::from_value(raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = %key, "settings value has unexpected type: {}", err);
                default
            }
        }
    }

    /// Writes through to disk; the in-memory value only changes once the write succeeded.
    pub fn set<T: Serialize>(&self, key: &str, value: T) -> Result<(), String> {
        let value = serde_json::to_value(value)
            .map_err(|e| format!("failed to serialize setting {key}: {e}"))?;

        let mut values = self.values.lock_or_recover();
        let mut next = values.clone();
        next.insert(key.to_string(), value);

        if let Some(path) = self.path.as_deref() {
            let content = serde_json::to_vec_pretty(&next)
                .map_err(|e| format!("failed to serialize settings: {e}"))?;
            write_file_atomic(path, &content)?;
        }

        *values = next;
        Ok(())
    }
}

/// Opens the store at the resolved config location, falling back to memory-only.
pub fn open_for_app(app: &tauri::AppHandle) -> SettingsStore {
    match app_paths::settings_path(app) {
        Ok(path) => SettingsStore::open(path),
        Err(err) => {
            tracing::warn!("settings path unavailable, using in-memory store: {}", err);
            SettingsStore::in_memory()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fs::test_support::unique_tmp_dir;

    #[test]
    fn get_returns_default_for_missing_key() {
        let store = SettingsStore::in_memory();
        assert_eq!(store.get(keys::DAEMON_PORT, DEFAULT_DAEMON_PORT), 11987);
        assert!(!store.contains(keys::DAEMON_PORT));
    }

    #[test]
    fn get_returns_default_when_type_differs() {
        let store = SettingsStore::in_memory();
        store.set(keys::DAEMON_PORT, "not a port").expect("set");
        assert_eq!(store.get(keys::DAEMON_PORT, DEFAULT_DAEMON_PORT), 11987);
    }

    #[test]
    fn set_is_visible_to_next_get() {
        let store = SettingsStore::in_memory();
        store.set(keys::DAEMON_ADDRESS, "10.0.0.2").expect("set");
        assert_eq!(
            store.get(keys::DAEMON_ADDRESS, DEFAULT_DAEMON_ADDRESS.to_string()),
            "10.0.0.2"
        );
    }

    #[test]
    fn set_persists_across_reopen() {
        let dir = unique_tmp_dir("settings");
        let path = dir.join("settings.json");

        let store = SettingsStore::open(&path);
        store.set(keys::DAEMON_ADDRESS, "daemon.lan").expect("set address");
        store.set(keys::DAEMON_PORT, 7777_u16).expect("set port");
        store.set(keys::DAEMON_SSL_ENABLED, true).expect("set ssl");
        drop(store);

        let reopened = SettingsStore::open(&path);
        assert_eq!(
            reopened.get(keys::DAEMON_ADDRESS, String::new()),
            "daemon.lan"
        );
        assert_eq!(reopened.get(keys::DAEMON_PORT, 0_u16), 7777);
        assert!(reopened.get(keys::DAEMON_SSL_ENABLED, false));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_write_leaves_value_unchanged() {
        let dir = unique_tmp_dir("settings");
        let blocker = dir.join("not-a-dir");
        std::fs::write(&blocker, "file").expect("write blocker file");

        let store = SettingsStore::open(blocker.join("settings.json"));
        let err = store.set(keys::DAEMON_PORT, 7777_u16).unwrap_err();
        assert!(err.starts_with("failed to create dir"), "{err}");

        assert!(!store.contains(keys::DAEMON_PORT));
        assert_eq!(store.get(keys::DAEMON_PORT, DEFAULT_DAEMON_PORT), 11987);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn open_with_corrupt_file_starts_empty() {
        let dir = unique_tmp_dir("settings");
        let path = dir.join("settings.json");
        std::fs::write(&path, "{ not json").expect("write corrupt file");

        let store = SettingsStore::open(&path);
        assert!(!store.contains(keys::DAEMON_ADDRESS));

        store.set(keys::DAEMON_PORT, 8080_u16).expect("set overwrites");
        let reopened = SettingsStore::open(&path);
        assert_eq!(reopened.get(keys::DAEMON_PORT, 0_u16), 8080);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn open_with_non_object_json_starts_empty() {
        let dir = unique_tmp_dir("settings");
        let path = dir.join("settings.json");
        std::fs::write(&path, "[1, 2, 3]").expect("write array");

        let store = SettingsStore::open(&path);
        assert!(!store.contains(keys::DAEMON_PORT));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
