//! Usage: Entry point for `window.ipc.call(method, args)` from the daemon web UI.

use crate::app_state::StoreState;
use crate::ipc::{handle, IpcMethod, IpcOutcome};
use crate::lifecycle;
use serde_json::Value;

#[tauri::command]
pub(crate) fn ipc_call(
    app: tauri::AppHandle,
    store: tauri::State<'_, StoreState>,
    method: String,
    args: Option<Value>,
) -> Result<Value, String> {
    let parsed = IpcMethod::parse(&method)?;
    tracing::debug!(method = %method, "ipc call");

    match handle(&store.0, parsed, &args.unwrap_or(Value::Null))? {
        IpcOutcome::Reply(value) => Ok(value),
        IpcOutcome::Quit => {
            lifecycle::quit(&app);
            Ok(Value::Bool(true))
        }
    }
}
