//! Usage: Daemon connection settings (host / port / TLS) and their persisted representation.

use crate::settings::{self, keys, SettingsStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub tls_enabled: bool,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: settings::DEFAULT_DAEMON_ADDRESS.to_string(),
            port: settings::DEFAULT_DAEMON_PORT,
            tls_enabled: settings::DEFAULT_DAEMON_SSL_ENABLED,
        }
    }
}

impl ConnectionSettings {
    pub fn load(store: &SettingsStore) -> Self {
        let defaults = Self::default();
        Self {
            host: store.get(keys::DAEMON_ADDRESS, defaults.host),
            port: store.get(keys::DAEMON_PORT, defaults.port),
            tls_enabled: store.get(keys::DAEMON_SSL_ENABLED, defaults.tls_enabled),
        }
    }

    /// Writes the three keys one after another; there is no cross-key transaction.
    pub fn save(&self, store: &SettingsStore) -> Result<(), String> {
        store.set(keys::DAEMON_ADDRESS, &self.host)?;
        store.set(keys::DAEMON_PORT, self.port)?;
        store.set(keys::DAEMON_SSL_ENABLED, self.tls_enabled)
    }

    /// True until a connection has been saved at least once.
    pub fn is_first_run(store: &SettingsStore) -> bool {
        !store.contains(keys::DAEMON_ADDRESS)
    }
}
