//! Usage: Native side of the `window.ipc` bridge exposed to the daemon web UI.
//!
//! Methods are dispatched through `IpcMethod`; adding a method means adding a variant and a
//! match arm in `handle`.

use crate::settings::{keys, SettingsStore, DEFAULT_START_IN_TRAY};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IpcMethod {
    AppVersion,
    GetStartInTray,
    SetStartInTray,
    ForceQuit,
}

impl IpcMethod {
    pub(crate) fn parse(method: &str) -> Result<Self, String> {
        match method.trim() {
            "appVersion" => Ok(Self::AppVersion),
            "getStartInTray" => Ok(Self::GetStartInTray),
            "setStartInTray" => Ok(Self::SetStartInTray),
            "forceQuit" => Ok(Self::ForceQuit),
            other => Err(format!("SEC_INVALID_INPUT: unknown ipc method={other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum IpcOutcome {
    Reply(Value),
    Quit,
}

fn bool_arg(args: &Value, method: &str) -> Result<bool, String> {
    match args {
        Value::Bool(v) => Ok(*v),
        Value::Object(map) => map
            .get("enabled")
            .and_then(Value::as_bool)
            .ok_or_else(|| format!("SEC_INVALID_INPUT: {method} expects {{ enabled: bool }}")),
        _ => Err(format!("SEC_INVALID_INPUT: {method} expects a bool")),
    }
}

pub(crate) fn handle(
    store: &SettingsStore,
    method: IpcMethod,
    args: &Value,
) -> Result<IpcOutcome, String> {
    match method {
        IpcMethod::AppVersion => Ok(IpcOutcome::Reply(Value::String(
            env!("CARGO_PKG_VERSION").to_string(),
        ))),
        IpcMethod::GetStartInTray => Ok(IpcOutcome::Reply(Value::Bool(
            store.get(keys::START_IN_TRAY, DEFAULT_START_IN_TRAY),
        ))),
        IpcMethod::SetStartInTray => {
            let enabled = bool_arg(args, "setStartInTray")?;
            store.set(keys::START_IN_TRAY, enabled)?;
            tracing::info!(enabled, "start in tray updated");
            Ok(IpcOutcome::Reply(Value::Bool(enabled)))
        }
        IpcMethod::ForceQuit => Ok(IpcOutcome::Quit),
    }
}
