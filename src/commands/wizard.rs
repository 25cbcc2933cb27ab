//! Usage: Address wizard commands (page navigation, reset, apply, quit).

use crate::app_state::ShellState;
use crate::connection::ConnectionSettings;
use crate::lifecycle;
use crate::shared::mutex_ext::MutexExt;
use crate::wizard::{WizardPage, WizardView};

const WIZARD_NOT_OPEN: &str = "WIZARD_NOT_OPEN: no address wizard session";

fn normalize_fields(fields: ConnectionSettings) -> Result<ConnectionSettings, String> {
    if fields.port == 0 {
        return Err("SEC_INVALID_INPUT: port must be between 1 and 65535".to_string());
    }
    Ok(ConnectionSettings {
        host: fields.host.trim().to_string(),
        ..fields
    })
}

#[tauri::command]
pub(crate) fn wizard_state_get(state: tauri::State<'_, ShellState>) -> Result<WizardView, String> {
    state
        .0
        .lock_or_recover()
        .wizard()
        .view()
        .ok_or_else(|| WIZARD_NOT_OPEN.to_string())
}

#[tauri::command]
pub(crate) fn wizard_next(state: tauri::State<'_, ShellState>) -> Result<WizardPage, String> {
    state
        .0
        .lock_or_recover()
        .wizard_mut()
        .next()
        .ok_or_else(|| WIZARD_NOT_OPEN.to_string())
}

#[tauri::command]
pub(crate) fn wizard_back(state: tauri::State<'_, ShellState>) -> Result<WizardPage, String> {
    state
        .0
        .lock_or_recover()
        .wizard_mut()
        .back()
        .ok_or_else(|| WIZARD_NOT_OPEN.to_string())
}

#[tauri::command]
pub(crate) fn wizard_reset(
    state: tauri::State<'_, ShellState>,
) -> Result<ConnectionSettings, String> {
    state
        .0
        .lock_or_recover()
        .wizard_mut()
        .reset()
        .ok_or_else(|| WIZARD_NOT_OPEN.to_string())
}

#[tauri::command]
pub(crate) fn wizard_edit(
    state: tauri::State<'_, ShellState>,
    fields: ConnectionSettings,
) -> Result<(), String> {
    let mut shell = state.0.lock_or_recover();
    if !shell.wizard().is_open() {
        return Err(WIZARD_NOT_OPEN.to_string());
    }
    shell.wizard_mut().edit(fields);
    Ok(())
}

#[tauri::command]
pub(crate) fn wizard_apply(app: tauri::AppHandle, fields: ConnectionSettings) -> Result<(), String> {
    let fields = normalize_fields(fields)?;
    lifecycle::wizard_accepted(&app, fields)
}

#[tauri::command]
pub(crate) fn wizard_quit(app: tauri::AppHandle) {
    lifecycle::wizard_cancelled(&app);
}
