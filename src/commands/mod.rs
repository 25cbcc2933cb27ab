//! Usage: Tauri command handlers invoked from the bundled pages and the daemon UI bridge.

mod ipc;
mod wizard;

pub(crate) use ipc::*;
pub(crate) use wizard::*;
