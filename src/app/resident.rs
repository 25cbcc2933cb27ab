//! Usage: Desktop resident mode (tray icon + window lifecycle hooks).

use super::browser::MAIN_WINDOW_LABEL;
use super::lifecycle;
use super::wizard_window::WIZARD_WINDOW_LABEL;
use tauri::Manager;

#[cfg(not(desktop))]
pub fn setup_tray(_app: &tauri::AppHandle) -> Result<(), String> {
    Ok(())
}

#[cfg(not(desktop))]
pub fn show_main_window(_app: &tauri::AppHandle) {}

#[cfg(desktop)]
use super::app_state::ShellState;
#[cfg(desktop)]
use crate::shared::mutex_ext::MutexExt;
#[cfg(desktop)]
use crate::tray::{
    ToggleIcon, TrayAction, TRAY_MENU_ADDRESS_ID, TRAY_MENU_QUIT_ID, TRAY_MENU_TOGGLE_ID,
};
#[cfg(desktop)]
use tauri::image::Image;
#[cfg(desktop)]
use tauri::menu::{IconMenuItem, Menu, MenuItem, PredefinedMenuItem};
#[cfg(desktop)]
use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};

#[cfg(desktop)]
const TRAY_ID: &str = "main-tray";
#[cfg(desktop)]
const TRAY_TOOLTIP: &str = "Daemon Deck";

/// Handle to the Show/Hide item so its label and icon can follow window visibility.
#[cfg(desktop)]
pub(crate) struct TrayMenuState {
    toggle_item: IconMenuItem<tauri::Wry>,
}

#[cfg(desktop)]
fn toggle_icon_image(icon: ToggleIcon) -> Result<Image<'static>, String> {
    let bytes: &[u8] = match icon {
        ToggleIcon::WindowClose => include_bytes!("../../icons/menu/window-close.png"),
        ToggleIcon::WindowNew => include_bytes!("../../icons/menu/window-new.png"),
    };
    Image::from_bytes(bytes).map_err(|e| format!("failed to load tray menu icon: {e}"))
}

#[cfg(desktop)]
fn toggle_presentation(app: &tauri::AppHandle) -> (&'static str, ToggleIcon) {
    let shell = app.state::<ShellState>();
    let shell = shell.0.lock_or_recover();
    (shell.tray().toggle_label(), shell.tray().toggle_icon())
}

#[cfg(desktop)]
pub fn setup_tray(app: &tauri::AppHandle) -> Result<(), String> {
    let (label, icon) = toggle_presentation(app);

    let header_item = MenuItem::with_id(app, "tray.header", TRAY_TOOLTIP, false, None::<&str>)
        .map_err(|e| format!("failed to create tray header item: {e}"))?;
    let toggle_item = IconMenuItem::with_id(
        app,
        TRAY_MENU_TOGGLE_ID,
        label,
        true,
        Some(toggle_icon_image(icon)?),
        None::<&str>,
    )
    .map_err(|e| format!("failed to create tray toggle menu item: {e}"))?;
    let address_item =
        MenuItem::with_id(app, TRAY_MENU_ADDRESS_ID, "Daemon Address", true, None::<&str>)
            .map_err(|e| format!("failed to create tray address menu item: {e}"))?;
    let quit_item = MenuItem::with_id(app, TRAY_MENU_QUIT_ID, "Quit", true, None::<&str>)
        .map_err(|e| format!("failed to create tray quit menu item: {e}"))?;
    let top_separator = PredefinedMenuItem::separator(app)
        .map_err(|e| format!("failed to create tray menu separator: {e}"))?;
    let bottom_separator = PredefinedMenuItem::separator(app)
        .map_err(|e| format!("failed to create tray menu separator: {e}"))?;

    let menu = Menu::with_items(
        app,
        &[
            &header_item,
            &top_separator,
            &toggle_item,
            &address_item,
            &bottom_separator,
            &quit_item,
        ],
    )
    .map_err(|e| format!("failed to create tray menu: {e}"))?;

    #[cfg(target_os = "macos")]
    let icon_bytes = include_bytes!("../../icons/128x128.png");
    #[cfg(not(target_os = "macos"))]
    let icon_bytes = include_bytes!("../../icons/32x32.png");

    let icon = tauri::image::Image::from_bytes(icon_bytes)
        .map_err(|e| format!("failed to load tray icon: {e}"))?;

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .tooltip(TRAY_TOOLTIP)
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            let Some(action) = TrayAction::from_menu_id(event.id.as_ref()) else {
                return;
            };
            apply_tray_action(app, action);
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button,
                button_state,
                ..
            } = event
            {
                if button == MouseButton::Left && button_state == MouseButtonState::Up {
                    apply_tray_action(tray.app_handle(), TrayAction::ToggleVisibility);
                }
            }
        })
        .build(app)
        .map_err(|e| format!("failed to build tray icon: {e}"))?;

    app.manage(TrayMenuState { toggle_item });
    Ok(())
}

#[cfg(desktop)]
fn apply_tray_action(app: &tauri::AppHandle, action: TrayAction) {
    tracing::debug!(?action, "tray action");
    match action {
        TrayAction::ToggleVisibility => toggle_main_window(app),
        TrayAction::DaemonAddress => lifecycle::request_wizard(app),
        TrayAction::Quit => lifecycle::quit(app),
    }
}

#[cfg(desktop)]
fn sync_toggle_item(app: &tauri::AppHandle) {
    let (label, icon) = toggle_presentation(app);

    let Some(menu) = app.try_state::<TrayMenuState>() else {
        return;
    };
    if let Err(err) = menu.toggle_item.set_text(label) {
        tracing::warn!("failed to update tray label: {}", err);
    }
    match toggle_icon_image(icon) {
        Ok(image) => {
            if let Err(err) = menu.toggle_item.set_icon(Some(image)) {
                tracing::warn!("failed to update tray icon: {}", err);
            }
        }
        Err(err) => tracing::warn!("{}", err),
    }
}

#[cfg(desktop)]
pub fn show_main_window(app: &tauri::AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };

    app.state::<ShellState>().0.lock_or_recover().tray_mut().show();
    let _ = window.show();
    let _ = window.unminimize();
    let _ = window.set_focus();
    sync_toggle_item(app);
}

#[cfg(desktop)]
fn toggle_main_window(app: &tauri::AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };

    let is_visible = window.is_visible().unwrap_or(false);
    let is_minimized = window.is_minimized().unwrap_or(false);

    let visible = app
        .state::<ShellState>()
        .0
        .lock_or_recover()
        .tray_mut()
        .toggle_from(is_visible && !is_minimized);

    if visible {
        let _ = window.show();
        let _ = window.unminimize();
        let _ = window.set_focus();
    } else {
        let _ = window.hide();
    }
    sync_toggle_item(app);
}

pub fn on_window_event(window: &tauri::Window, event: &tauri::WindowEvent) {
    let tauri::WindowEvent::CloseRequested { api, .. } = event else {
        return;
    };

    match window.label() {
        MAIN_WINDOW_LABEL => {
            // Always quit on close; the process exits from the lifecycle handler.
            api.prevent_close();
            lifecycle::main_close_requested(window.app_handle());
        }
        WIZARD_WINDOW_LABEL => {
            api.prevent_close();
            lifecycle::wizard_cancelled(window.app_handle());
        }
        _ => {}
    }
}
