//! Usage: Modal window hosting the daemon address wizard page.

use super::browser::MAIN_WINDOW_LABEL;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

pub(crate) const WIZARD_WINDOW_LABEL: &str = "wizard";
const WIZARD_TITLE: &str = "Daemon Connection Error";
const WIZARD_PAGE: &str = "wizard.html";

pub(crate) fn show(app: &tauri::AppHandle) -> Result<(), String> {
    if app.get_webview_window(WIZARD_WINDOW_LABEL).is_some() {
        focus(app);
        return Ok(());
    }

    let mut builder =
        WebviewWindowBuilder::new(app, WIZARD_WINDOW_LABEL, WebviewUrl::App(WIZARD_PAGE.into()))
            .title(WIZARD_TITLE)
            .inner_size(560.0, 440.0)
            .resizable(false)
            .minimizable(false)
            .maximizable(false)
            .always_on_top(true)
            .center()
            .focused(true);

    let main = app.get_webview_window(MAIN_WINDOW_LABEL);
    if let Some(main) = main.as_ref() {
        // A hidden owner would hide the wizard with it on some platforms.
        if main.is_visible().unwrap_or(false) {
            builder = builder
                .parent(main)
                .map_err(|e| format!("failed to attach wizard to main window: {e}"))?;
        }
    }

    builder
        .build()
        .map_err(|e| format!("failed to create wizard window: {e}"))?;

    // Disable the owner only after the wizard exists.
    if let Some(main) = main {
        let _ = main.set_enabled(false);
    }
    Ok(())
}

pub(crate) fn focus(app: &tauri::AppHandle) {
    let Some(window) = app.get_webview_window(WIZARD_WINDOW_LABEL) else {
        return;
    };
    let _ = window.show();
    let _ = window.set_focus();
}

/// Closes the wizard without raising a close request (which would count as Quit).
pub(crate) fn dismiss(app: &tauri::AppHandle) {
    if let Some(main) = app.get_webview_window(MAIN_WINDOW_LABEL) {
        let _ = main.set_enabled(true);
    }
    if let Some(window) = app.get_webview_window(WIZARD_WINDOW_LABEL) {
        if let Err(err) = window.destroy() {
            tracing::warn!("failed to destroy wizard window: {}", err);
        }
    }
}
