//! Usage: Daemon address wizard state (intro page, address page, reset/accept/cancel).
//!
//! The wizard is a singleton: opening it while a session is active is a no-op. Input values
//! start from, and reset to, the settings snapshot taken when the session was opened.

use super::connection::ConnectionSettings;
use crate::settings::SettingsStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPage {
    Intro,
    AddressInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Accepted(ConnectionSettings),
    Cancelled,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub page: WizardPage,
    pub fields: ConnectionSettings,
}

#[derive(Debug, Clone)]
struct WizardSession {
    page: WizardPage,
    snapshot: ConnectionSettings,
    fields: ConnectionSettings,
}

#[derive(Debug, Default)]
pub struct AddressWizard {
    session: Option<WizardSession>,
}

impl AddressWizard {
    /// Returns `false` when a session is already open.
    pub fn open(&mut self, store: &SettingsStore) -> bool {
        if self.session.is_some() {
            return false;
        }
        let snapshot = ConnectionSettings::load(store);
        self.session = Some(WizardSession {
            page: WizardPage::Intro,
            fields: snapshot.clone(),
            snapshot,
        });
        true
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn view(&self) -> Option<WizardView> {
        self.session.as_ref().map(|s| WizardView {
            page: s.page,
            fields: s.fields.clone(),
        })
    }

    #[cfg(test)]
    pub fn page(&self) -> Option<WizardPage> {
        self.session.as_ref().map(|s| s.page)
    }

    #[cfg(test)]
    pub fn fields(&self) -> Option<&ConnectionSettings> {
        self.session.as_ref().map(|s| &s.fields)
    }

    pub fn next(&mut self) -> Option<WizardPage> {
        let session = self.session.as_mut()?;
        session.page = WizardPage::AddressInput;
        Some(session.page)
    }

    pub fn back(&mut self) -> Option<WizardPage> {
        let session = self.session.as_mut()?;
        session.page = WizardPage::Intro;
        Some(session.page)
    }

    pub fn edit(&mut self, fields: ConnectionSettings) {
        if let Some(session) = self.session.as_mut() {
            session.fields = fields;
        }
    }

    pub fn reset(&mut self) -> Option<ConnectionSettings> {
        let session = self.session.as_mut()?;
        session.fields = session.snapshot.clone();
        Some(session.fields.clone())
    }

    pub fn accept(
        &mut self,
        fields: ConnectionSettings,
        store: &SettingsStore,
    ) -> Result<WizardOutcome, String> {
        if self.session.is_none() {
            return Err("WIZARD_NOT_OPEN: no address wizard session".to_string());
        }
        fields.save(store)?;
        self.session = None;
        Ok(WizardOutcome::Accepted(fields))
    }

    pub fn cancel(&mut self) -> WizardOutcome {
        self.session = None;
        WizardOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::keys;

    fn store_with(host: &str, port: u16, tls_enabled: bool) -> SettingsStore {
        let store = SettingsStore::in_memory();
        ConnectionSettings {
            host: host.to_string(),
            port,
            tls_enabled,
        }
        .save(&store)
        .expect("seed store");
        store
    }

    #[test]
    fn open_starts_on_intro_with_store_values() {
        let store = store_with("10.1.1.1", 8000, true);
        let mut wizard = AddressWizard::default();

        assert!(wizard.open(&store));
        assert_eq!(wizard.page(), Some(WizardPage::Intro));
        let fields = wizard.fields().expect("fields");
        assert_eq!(fields.host, "10.1.1.1");
        assert_eq!(fields.port, 8000);
        assert!(fields.tls_enabled);
    }

    #[test]
    fn second_open_is_a_no_op() {
        let store = SettingsStore::in_memory();
        let mut wizard = AddressWizard::default();
        assert!(wizard.open(&store));
        wizard.next();

        assert!(!wizard.open(&store));
        assert_eq!(wizard.page(), Some(WizardPage::AddressInput));
    }

    #[test]
    fn next_and_back_switch_pages() {
        let store = SettingsStore::in_memory();
        let mut wizard = AddressWizard::default();
        assert_eq!(wizard.next(), None);

        wizard.open(&store);
        assert_eq!(wizard.next(), Some(WizardPage::AddressInput));
        assert_eq!(wizard.back(), Some(WizardPage::Intro));
    }

    #[test]
    fn reset_restores_store_values_not_hard_coded_defaults() {
        let store = store_with("nas.local", 12000, true);
        let mut wizard = AddressWizard::default();
        wizard.open(&store);

        for edit in [
            ConnectionSettings {
                host: "other".to_string(),
                port: 1,
                tls_enabled: false,
            },
            ConnectionSettings::default(),
            ConnectionSettings {
                host: String::new(),
                port: 65535,
                tls_enabled: true,
            },
        ] {
            wizard.edit(edit);
            let restored = wizard.reset().expect("reset");
            assert_eq!(restored, ConnectionSettings::load(&store));
            assert_eq!(wizard.fields(), Some(&restored));
        }
    }

    #[test]
    fn accept_persists_exactly_the_submitted_values() {
        let store = SettingsStore::in_memory();
        let mut wizard = AddressWizard::default();
        wizard.open(&store);
        wizard.next();

        let submitted = ConnectionSettings {
            host: "192.168.1.50".to_string(),
            port: 7777,
            tls_enabled: false,
        };
        let outcome = wizard.accept(submitted.clone(), &store).expect("accept");

        assert_eq!(outcome, WizardOutcome::Accepted(submitted));
        assert!(!wizard.is_open());
        assert_eq!(store.get(keys::DAEMON_ADDRESS, String::new()), "192.168.1.50");
        assert_eq!(store.get(keys::DAEMON_PORT, 0_u16), 7777);
        assert!(!store.get(keys::DAEMON_SSL_ENABLED, true));
    }

    #[test]
    fn accept_without_session_is_rejected() {
        let store = SettingsStore::in_memory();
        let mut wizard = AddressWizard::default();
        let err = wizard
            .accept(ConnectionSettings::default(), &store)
            .unwrap_err();
        assert!(err.starts_with("WIZARD_NOT_OPEN"), "{err}");
        assert!(!store.contains(keys::DAEMON_ADDRESS));
    }

    #[test]
    fn cancel_closes_session_without_writing() {
        let store = SettingsStore::in_memory();
        let mut wizard = AddressWizard::default();
        wizard.open(&store);
        wizard.edit(ConnectionSettings {
            host: "ignored".to_string(),
            port: 1234,
            tls_enabled: true,
        });

        assert_eq!(wizard.cancel(), WizardOutcome::Cancelled);
        assert!(!wizard.is_open());
        assert!(!store.contains(keys::DAEMON_ADDRESS));
        assert!(wizard.open(&store));
    }
}
