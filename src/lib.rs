mod app;
mod commands;
mod domain;
mod infra;
mod shared;

pub(crate) use app::{app_state, ipc, lifecycle, resident};
pub(crate) use domain::{connection, shell, tray, wizard};
pub(crate) use infra::{app_paths, reachability, settings};

use app_state::{ShellState, StoreState};
use commands::*;
use settings::{keys, DEFAULT_START_IN_TRAY};
use std::sync::Arc;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default().plugin(tauri_plugin_opener::init());

    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
        resident::show_main_window(app);
    }));

    let app = builder
        .on_window_event(resident::on_window_event)
        .setup(|app| {
            crate::app::logging::init(app.handle());

            let store = Arc::new(settings::open_for_app(app.handle()));
            if let Some(path) = store.path() {
                tracing::info!(path = %path.display(), "settings store");
            }
            if connection::ConnectionSettings::is_first_run(&store) {
                tracing::info!("no daemon address saved yet, using defaults");
            }

            let start_in_tray = store.get(keys::START_IN_TRAY, DEFAULT_START_IN_TRAY);
            app.manage(StoreState(store));
            app.manage(ShellState::new(!start_in_tray));

            if let Err(err) = app::browser::build_main_window(app.handle(), !start_in_tray) {
                tracing::error!("main window setup failed: {}", err);
                return Err(err.into());
            }

            if let Err(err) = resident::setup_tray(app.handle()) {
                tracing::error!("tray setup failed: {}", err);
                if start_in_tray {
                    lifecycle::start_in_tray_failed(app.handle());
                }
            }

            lifecycle::start(app.handle());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            wizard_state_get,
            wizard_next,
            wizard_back,
            wizard_reset,
            wizard_edit,
            wizard_apply,
            wizard_quit,
            ipc_call
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let tauri::RunEvent::ExitRequested { code, .. } = &event {
            tracing::info!(?code, "exit requested");
            return;
        }

        #[cfg(target_os = "macos")]
        if let tauri::RunEvent::Reopen {
            has_visible_windows,
            ..
        } = event
        {
            if !has_visible_windows {
                resident::show_main_window(app_handle);
            }
        }
        #[cfg(not(target_os = "macos"))]
        let _ = app_handle;
    });
}
