//! The (authId, authKey) credential pair.

use std::fmt;

/// Authenticates every remote call. Both halves are required together.
///
/// There is no way to build a half-configured pair: [`Credentials::from_parts`]
/// returns `None` unless both values are present and non-blank.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    auth_id: String,
    auth_key: String,
}

impl Credentials {
    pub fn from_parts(auth_id: Option<String>, auth_key: Option<String>) -> Option<Self> {
        let auth_id = auth_id.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())?;
        let auth_key = auth_key
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())?;
        Some(Self { auth_id, auth_key })
    }

    pub fn auth_id(&self) -> &str {
        &self.auth_id
    }

    pub fn auth_key(&self) -> &str {
        &self.auth_key
    }

    /// Key with everything after the first two characters hidden.
    pub fn masked_key(&self) -> String {
        let visible: String = self.auth_key.chars().take(2).collect();
        format!("{visible}***")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_id", &self.auth_id)
            .field("auth_key", &self.masked_key())
            .finish()
    }
}
