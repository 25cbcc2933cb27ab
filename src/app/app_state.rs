//! Usage: Shared Tauri state types used by `commands/*`, the tray and window callbacks.

use crate::settings::SettingsStore;
use crate::shell::Shell;
use std::sync::{Arc, Mutex};

pub(crate) struct StoreState(pub(crate) Arc<SettingsStore>);

pub(crate) struct ShellState(pub(crate) Mutex<Shell>);

impl ShellState {
    pub(crate) fn new(start_visible: bool) -> Self {
        Self(Mutex::new(Shell::new(start_visible)))
    }
}
