//! Usage: Resolve per-user config / data / log directories for the shell.

use std::path::PathBuf;
use tauri::Manager;

const CONFIG_DIR_ENV: &str = "DAEMON_DECK_CONFIG_DIR";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
const WEBVIEW_PROFILE_DIR_NAME: &str = "webview-profile";

fn config_dir_override(raw: Option<String>) -> Option<PathBuf> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let path = PathBuf::from(trimmed);
    if !path.is_absolute() {
        return None;
    }
    Some(path)
}

pub fn config_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    if let Some(dir) = config_dir_override(std::env::var(CONFIG_DIR_ENV).ok()) {
        return Ok(dir);
    }

    app.path()
        .app_config_dir()
        .map_err(|e| format!("failed to resolve app config dir: {e}"))
}

pub fn settings_path(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    Ok(config_dir(app)?.join(SETTINGS_FILE_NAME))
}

/// Persistent browsing profile (cookies, local storage) for the embedded web view.
pub fn webview_profile_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let dir = app
        .path()
        .app_local_data_dir()
        .map_err(|e| format!("failed to resolve app local data dir: {e}"))?
        .join(WEBVIEW_PROFILE_DIR_NAME);
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("failed to create {}: {e}", dir.display()))?;
    Ok(dir)
}

pub fn log_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let dir = app
        .path()
        .app_log_dir()
        .map_err(|e| format!("failed to resolve app log dir: {e}"))?;
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("failed to create {}: {e}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_override_ignores_blank_and_relative_values() {
        assert_eq!(config_dir_override(None), None);
        assert_eq!(config_dir_override(Some("   ".to_string())), None);
        assert_eq!(config_dir_override(Some("relative/dir".to_string())), None);
    }

    #[test]
    fn config_dir_override_accepts_absolute_path() {
        let abs = std::env::temp_dir().join("daemon-deck-config");
        let raw = format!("  {}  ", abs.display());
        assert_eq!(config_dir_override(Some(raw)), Some(abs));
    }
}
