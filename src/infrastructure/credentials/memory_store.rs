//! In-process credential store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::Credentials;
use crate::domain::ports::{ConfigScope, CredentialKey, CredentialStore, StoreError};

/// Keeps values in memory; workspace values shadow global ones.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: Mutex<HashMap<(ConfigScope, CredentialKey), String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `credentials` in the global scope.
    pub fn with_credentials(credentials: &Credentials) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(
                (ConfigScope::Global, CredentialKey::AuthId),
                credentials.auth_id().to_string(),
            );
            values.insert(
                (ConfigScope::Global, CredentialKey::AuthKey),
                credentials.auth_key().to_string(),
            );
        }
        store
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        let values = self.values.lock().ok()?;
        [ConfigScope::Workspace, ConfigScope::Global]
            .into_iter()
            .filter_map(|scope| values.get(&(scope, key)))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_owned)
    }

    fn set(&self, key: CredentialKey, value: &str, scope: ConfigScope) -> Result<(), StoreError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StoreError::Io(std::io::Error::other("credential store lock poisoned")))?;
        values.insert((scope, key), value.to_string());
        Ok(())
    }
}
