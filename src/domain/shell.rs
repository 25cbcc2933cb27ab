//! Usage: Main-window state machine (load → ready / wizard → reload or exit).
//!
//! Pure logic: every event returns the action(s) the Tauri layer must perform, so the whole
//! lifecycle is testable without a window.

use super::connection::ConnectionSettings;
use super::daemon_url::daemon_url;
use super::tray::TrayState;
use super::wizard::{AddressWizard, WizardOutcome};
use crate::settings::SettingsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    Loading,
    Ready,
    WizardOpen,
    Closing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Load(String),
    ShowWizard,
    CloseWindow,
    Exit,
}

#[derive(Debug)]
pub struct Shell {
    phase: ShellPhase,
    current_url: Option<String>,
    phase_before_wizard: ShellPhase,
    wizard: AddressWizard,
    tray: TrayState,
}

impl Shell {
    pub fn new(start_visible: bool) -> Self {
        Self {
            phase: ShellPhase::Loading,
            current_url: None,
            phase_before_wizard: ShellPhase::Loading,
            wizard: AddressWizard::default(),
            tray: TrayState::new(start_visible),
        }
    }

    pub fn phase(&self) -> ShellPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// The daemon URL while its UI is showing; page loads are only re-checked then.
    pub fn ready_url(&self) -> Option<&str> {
        match self.phase {
            ShellPhase::Ready => self.current_url.as_deref(),
            _ => None,
        }
    }

    pub fn wizard(&self) -> &AddressWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut AddressWizard {
        &mut self.wizard
    }

    pub fn tray(&self) -> &TrayState {
        &self.tray
    }

    pub fn tray_mut(&mut self) -> &mut TrayState {
        &mut self.tray
    }

    pub fn is_closing(&self) -> bool {
        self.phase == ShellPhase::Closing
    }

    pub fn start(&mut self, store: &SettingsStore) -> ShellAction {
        let url = daemon_url(&ConnectionSettings::load(store));
        tracing::info!(url = %url, "loading daemon ui");
        self.begin_load(url)
    }

    fn begin_load(&mut self, url: String) -> ShellAction {
        self.phase = ShellPhase::Loading;
        self.current_url = Some(url.clone());
        ShellAction::Load(url)
    }

    /// Results for a URL other than the one currently requested are stale and ignored.
    pub fn load_finished(
        &mut self,
        url: &str,
        ok: bool,
        store: &SettingsStore,
    ) -> Option<ShellAction> {
        if self.current_url.as_deref() != Some(url) {
            tracing::debug!(url = %url, "ignoring stale load result");
            return None;
        }

        if ok {
            if self.phase == ShellPhase::Loading {
                self.phase = ShellPhase::Ready;
                tracing::info!(url = %url, "daemon ui loaded");
            }
            return None;
        }

        tracing::warn!(url = %url, "daemon ui failed to load");
        self.request_wizard(store)
    }

    /// Result of re-checking a page load the webview started on its own (reload, in-app
    /// link) while the UI at `daemon_url` was showing.
    pub fn page_load_checked(
        &mut self,
        daemon_url: &str,
        ok: bool,
        store: &SettingsStore,
    ) -> Option<ShellAction> {
        if ok || self.ready_url() != Some(daemon_url) {
            return None;
        }
        tracing::warn!(url = %daemon_url, "daemon ui page load failed");
        self.request_wizard(store)
    }

    pub fn request_wizard(&mut self, store: &SettingsStore) -> Option<ShellAction> {
        if self.is_closing() {
            return None;
        }
        if !self.wizard.open(store) {
            tracing::debug!("address wizard already open");
            return None;
        }
        self.phase_before_wizard = self.phase;
        self.phase = ShellPhase::WizardOpen;
        tracing::info!("address wizard opened");
        Some(ShellAction::ShowWizard)
    }

    pub fn wizard_accepted(
        &mut self,
        fields: ConnectionSettings,
        store: &SettingsStore,
    ) -> Result<ShellAction, String> {
        let WizardOutcome::Accepted(settings) = self.wizard.accept(fields, store)? else {
            return Err("WIZARD_NOT_OPEN: wizard did not accept".to_string());
        };
        let url = daemon_url(&settings);
        tracing::info!(url = %url, "daemon address updated");
        Ok(self.begin_load(url))
    }

    /// The wizard window could not be created: drop the session so it can be requested again.
    pub fn wizard_show_failed(&mut self) {
        self.wizard.cancel();
        if self.phase == ShellPhase::WizardOpen {
            self.phase = self.phase_before_wizard;
        }
    }

    pub fn wizard_cancelled(&mut self) -> ShellAction {
        self.wizard.cancel();
        self.phase = ShellPhase::Closing;
        tracing::info!("address wizard cancelled, exiting");
        ShellAction::Exit
    }

    /// Tray "Quit": mark closing and let the window close handler end the process.
    pub fn quit(&mut self) -> ShellAction {
        self.phase = ShellPhase::Closing;
        ShellAction::CloseWindow
    }

    /// Closing the main window always ends the process.
    pub fn close_requested(&mut self) -> ShellAction {
        self.phase = ShellPhase::Closing;
        ShellAction::Exit
    }
}
