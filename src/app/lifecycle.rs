//! Usage: Drive the shell state machine from Tauri events and execute the resulting actions.
//!
//! The shell lock is always released before an action runs, since window operations can
//! re-enter through window event callbacks.

use super::app_state::{ShellState, StoreState};
use super::{browser, resident, wizard_window};
use crate::connection::ConnectionSettings;
use crate::settings::SettingsStore;
use crate::shared::mutex_ext::MutexExt;
use crate::shell::{Shell, ShellAction};
use tauri::Manager;

fn with_shell<T>(app: &tauri::AppHandle, f: impl FnOnce(&mut Shell, &SettingsStore) -> T) -> T {
    let store = app.state::<StoreState>();
    let shell = app.state::<ShellState>();
    let mut guard = shell.0.lock_or_recover();
    f(&mut guard, &store.0)
}

pub(crate) fn perform(app: &tauri::AppHandle, action: ShellAction) {
    match action {
        ShellAction::Load(url) => browser::load_daemon_ui(app, url),
        ShellAction::ShowWizard => {
            if let Err(err) = wizard_window::show(app) {
                tracing::error!("failed to show address wizard: {}", err);
                with_shell(app, |shell, _| shell.wizard_show_failed());
            }
        }
        ShellAction::CloseWindow => {
            let Some(window) = app.get_webview_window(browser::MAIN_WINDOW_LABEL) else {
                app.exit(0);
                return;
            };
            if let Err(err) = window.close() {
                tracing::warn!("main window close failed, exiting directly: {}", err);
                app.exit(0);
            }
        }
        ShellAction::Exit => {
            tracing::info!("exiting");
            app.exit(0);
        }
    }
}

pub(crate) fn start(app: &tauri::AppHandle) {
    let action = with_shell(app, |shell, store| shell.start(store));
    perform(app, action);
}

pub(crate) fn load_finished(app: &tauri::AppHandle, url: &str, ok: bool) {
    let action = with_shell(app, |shell, store| {
        let action = shell.load_finished(url, ok, store);
        tracing::debug!(url = %url, ok, phase = ?shell.phase(), "load finished");
        action
    });
    if let Some(action) = action {
        perform(app, action);
    }
}

pub(crate) fn ready_daemon_url(app: &tauri::AppHandle) -> Option<String> {
    with_shell(app, |shell, _| shell.ready_url().map(str::to_string))
}

pub(crate) fn page_load_checked(app: &tauri::AppHandle, daemon_url: &str, ok: bool) {
    let action = with_shell(app, |shell, store| shell.page_load_checked(daemon_url, ok, store));
    if let Some(action) = action {
        perform(app, action);
    }
}

pub(crate) fn request_wizard(app: &tauri::AppHandle) {
    let action = with_shell(app, |shell, store| shell.request_wizard(store));
    match action {
        Some(action) => perform(app, action),
        // Already open: bring it forward instead of stacking a second one.
        None => wizard_window::focus(app),
    }
}

pub(crate) fn wizard_accepted(
    app: &tauri::AppHandle,
    fields: ConnectionSettings,
) -> Result<(), String> {
    let action = with_shell(app, |shell, store| shell.wizard_accepted(fields, store))?;
    wizard_window::dismiss(app);
    perform(app, action);
    Ok(())
}

pub(crate) fn wizard_cancelled(app: &tauri::AppHandle) {
    let action = with_shell(app, |shell, _| shell.wizard_cancelled());
    perform(app, action);
}

pub(crate) fn quit(app: &tauri::AppHandle) {
    let action = with_shell(app, |shell, _| shell.quit());
    perform(app, action);
}

pub(crate) fn main_close_requested(app: &tauri::AppHandle) {
    let action = with_shell(app, |shell, _| shell.close_requested());
    perform(app, action);
}

pub(crate) fn start_in_tray_failed(app: &tauri::AppHandle) {
    // Without a tray icon a hidden window could never be shown again.
    tracing::warn!("tray unavailable, showing main window");
    resident::show_main_window(app);
}
