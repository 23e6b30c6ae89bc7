//! Collaborator contracts consumed by the application layer.
//!
//! These traits abstract the remote service and the host-provided capabilities.
//! Implementations live in `crate::infrastructure`; mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Ports
//!
//! - [`ShortUrlApi`] - Remote short URL operations
//! - [`CredentialStore`] - Credential key-value storage
//! - [`DisplaySurface`] - Outbound message sink
//! - [`SettingsEditor`] - Host configuration editor

pub mod credential_store;
pub mod short_url_api;
pub mod surface;

pub use credential_store::{
    ConfigScope, CredentialKey, CredentialStore, StoreError, load_credentials, save_credentials,
};
pub use short_url_api::ShortUrlApi;
pub use surface::{DisplaySurface, SettingsEditor};

#[cfg(test)]
pub use credential_store::MockCredentialStore;
#[cfg(test)]
pub use short_url_api::MockShortUrlApi;
#[cfg(test)]
pub use surface::MockSettingsEditor;
