//! Usage: Toolkit-free shell logic (connection settings, URL building, wizard, tray, lifecycle).

pub(crate) mod connection;
pub(crate) mod daemon_url;
pub(crate) mod shell;
pub(crate) mod tray;
pub(crate) mod wizard;
