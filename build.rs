fn main() {
    tauri_build::try_build(tauri_build::Attributes::new().app_manifest(
        tauri_build::AppManifest::new().commands(&[
            "wizard_state_get",
            "wizard_next",
            "wizard_back",
            "wizard_reset",
            "wizard_edit",
            "wizard_apply",
            "wizard_quit",
            "ipc_call",
        ]),
    ))
    .expect("failed to run tauri-build");
}
