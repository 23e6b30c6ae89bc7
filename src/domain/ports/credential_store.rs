//! Contract for the host's credential key-value store.

use std::fmt;

use crate::domain::entities::Credentials;

/// The two keys the store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    AuthId,
    AuthKey,
}

impl CredentialKey {
    /// Settings key, namespaced the way the host's settings file stores it.
    pub fn as_str(self) -> &'static str {
        match self {
            CredentialKey::AuthId => "urlShortener.authId",
            CredentialKey::AuthKey => "urlShortener.authKey",
        }
    }
}

impl fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a value is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConfigScope {
    #[default]
    Global,
    Workspace,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No settings file configured for the {0:?} scope")]
    ScopeUnavailable(ConfigScope),
}

/// Opaque string storage for the credential pair.
///
/// Blank values are reported as absent.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: CredentialKey) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be persisted.
    fn set(&self, key: CredentialKey, value: &str, scope: ConfigScope) -> Result<(), StoreError>;
}

/// Reads the pair atomically. A half-configured pair reads as `None`.
pub fn load_credentials(store: &dyn CredentialStore) -> Option<Credentials> {
    Credentials::from_parts(
        store.get(CredentialKey::AuthId),
        store.get(CredentialKey::AuthKey),
    )
}

/// Writes both halves of the pair to `scope`.
///
/// # Errors
///
/// Returns the first [`StoreError`] encountered.
pub fn save_credentials(
    store: &dyn CredentialStore,
    credentials: &Credentials,
    scope: ConfigScope,
) -> Result<(), StoreError> {
    store.set(CredentialKey::AuthId, credentials.auth_id(), scope)?;
    store.set(CredentialKey::AuthKey, credentials.auth_key(), scope)?;
    Ok(())
}
