//! Usage: Main window hosting the daemon web UI (profile, ipc bridge, external links, loading).

use super::lifecycle;
use crate::app_paths;
use crate::reachability::check_reachable;
use tauri::ipc::CapabilityBuilder;
use tauri::webview::{NewWindowResponse, PageLoadEvent};
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};
use tauri_plugin_opener::OpenerExt;

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
const WINDOW_TITLE: &str = "Daemon Deck";
const LOADING_PAGE: &str = "index.html";
const DAEMON_CAPABILITY_PREFIX: &str = "daemon-ipc";
const IPC_CALL_PERMISSION: &str = "allow-ipc-call";

/// Registers `window.ipc` on every page; `call` forwards to the native `ipc_call` command.
const IPC_BRIDGE_SCRIPT: &str = r#"
(function () {
  if (window.ipc) return;
  const invoke = (cmd, args) => window.__TAURI_INTERNALS__.invoke(cmd, args);
  Object.defineProperty(window, "ipc", {
    value: Object.freeze({
      call: (method, args) => invoke("ipc_call", { method, args: args ?? null }),
    }),
    writable: false,
    configurable: false,
  });
})();
"#;

/// Screen capture is not offered to the daemon UI.
const CAPTURE_GUARD_SCRIPT: &str = r#"
(function () {
  const media = navigator.mediaDevices;
  if (!media || !media.getDisplayMedia) return;
  media.getDisplayMedia = () =>
    Promise.reject(new DOMException("screen capture is disabled", "NotAllowedError"));
})();
"#;

fn is_pdf_document(url: &tauri::Url) -> bool {
    url.path().to_ascii_lowercase().ends_with(".pdf")
}

fn open_external(app: &tauri::AppHandle, url: &str) {
    tracing::info!(url = %url, "opening in external browser");
    if let Err(err) = app.opener().open_url(url, None::<&str>) {
        tracing::warn!(url = %url, "failed to open external browser: {}", err);
    }
}

fn capability_id(url: &tauri::Url) -> String {
    let origin = url.origin().ascii_serialization();
    let sanitized: String = origin
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("{DAEMON_CAPABILITY_PREFIX}-{sanitized}")
}

fn is_daemon_page(daemon_url: &str, page: &tauri::Url) -> bool {
    daemon_url
        .parse::<tauri::Url>()
        .is_ok_and(|daemon| daemon.origin() == page.origin())
}

/// Page loads the webview starts on its own (reload, in-app links) are checked again while the
/// daemon UI is showing, so a daemon that went away still opens the wizard.
fn recheck_page_load(app: &tauri::AppHandle, page: &tauri::Url) {
    let Some(daemon_url) = lifecycle::ready_daemon_url(app) else {
        return;
    };
    if !is_daemon_page(&daemon_url, page) {
        return;
    }

    let app = app.clone();
    let page = page.to_string();
    tauri::async_runtime::spawn(async move {
        let ok = match check_reachable(&page).await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(url = %page, "daemon page load failed: {}", err);
                false
            }
        };

        let handle = app.clone();
        if let Err(err) = app.run_on_main_thread(move || {
            lifecycle::page_load_checked(&handle, &daemon_url, ok)
        }) {
            tracing::error!("failed to dispatch page load result: {}", err);
        }
    });
}

pub(crate) fn build_main_window(app: &tauri::AppHandle, visible: bool) -> Result<(), String> {
    let profile_dir = app_paths::webview_profile_dir(app)?;
    let new_window_app = app.clone();
    let navigation_app = app.clone();
    let page_load_app = app.clone();

    WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, WebviewUrl::App(LOADING_PAGE.into()))
        .title(WINDOW_TITLE)
        .inner_size(1280.0, 800.0)
        .min_inner_size(800.0, 600.0)
        .visible(visible)
        .data_directory(profile_dir)
        .incognito(false)
        .initialization_script(IPC_BRIDGE_SCRIPT)
        .initialization_script(CAPTURE_GUARD_SCRIPT)
        .on_new_window(move |url, _features| {
            open_external(&new_window_app, url.as_str());
            NewWindowResponse::Deny
        })
        .on_navigation(move |url| {
            if is_pdf_document(url) {
                open_external(&navigation_app, url.as_str());
                return false;
            }
            true
        })
        .on_page_load(move |_window, payload| {
            if matches!(payload.event(), PageLoadEvent::Started) {
                recheck_page_load(&page_load_app, payload.url());
            }
        })
        .build()
        .map_err(|e| format!("failed to create main window: {e}"))?;

    Ok(())
}

fn grant_ipc_to(app: &tauri::AppHandle, url: &tauri::Url) {
    let pattern = format!("{}/*", url.origin().ascii_serialization());
    let capability = CapabilityBuilder::new(capability_id(url))
        .remote(pattern.clone())
        .window(MAIN_WINDOW_LABEL)
        .permission(IPC_CALL_PERMISSION);

    if let Err(err) = app.add_capability(capability) {
        tracing::debug!(pattern = %pattern, "ipc capability not added: {}", err);
    }
}

fn navigate(app: &tauri::AppHandle, url: &str) -> Result<(), String> {
    let parsed: tauri::Url = url
        .parse()
        .map_err(|e| format!("SEC_INVALID_INPUT: invalid daemon url={url}: {e}"))?;
    let window = app
        .get_webview_window(MAIN_WINDOW_LABEL)
        .ok_or_else(|| "main window is gone".to_string())?;

    grant_ipc_to(app, &parsed);
    window
        .navigate(parsed)
        .map_err(|e| format!("failed to navigate main window: {e}"))
}

/// Checks the daemon is reachable, navigates on success and reports the outcome to the shell.
pub(crate) fn load_daemon_ui(app: &tauri::AppHandle, url: String) {
    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        let reached = check_reachable(&url).await;

        let ok = match reached.and_then(|elapsed| {
            navigate(&app, &url)?;
            Ok(elapsed)
        }) {
            Ok(elapsed) => {
                let elapsed_ms = elapsed.as_millis() as u64;
                tracing::info!(url = %url, elapsed_ms, "daemon reachable");
                true
            }
            Err(err) => {
                tracing::warn!(url = %url, "daemon load failed: {}", err);
                false
            }
        };

        let handle = app.clone();
        if let Err(err) = app.run_on_main_thread(move || lifecycle::load_finished(&handle, &url, ok))
        {
            tracing::error!("failed to dispatch load result: {}", err);
        }
    });
}
