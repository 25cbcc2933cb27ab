//! Usage: Application layer (Tauri-managed state, windows, tray, lifecycle wiring).

pub(crate) mod app_state;
pub(crate) mod browser;
pub(crate) mod ipc;
pub(crate) mod lifecycle;
pub(crate) mod logging;
pub(crate) mod resident;
pub(crate) mod wizard_window;
