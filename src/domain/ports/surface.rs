//! Contracts for the display surface and the settings editor.

use crate::domain::messages::OutboundMessage;

/// Rendering and input-collection boundary.
///
/// Delivery is fire-and-forget; the surface owns its own rendering state.
pub trait DisplaySurface: Send + Sync {
    fn post_message(&self, message: OutboundMessage);
}

/// Opens the host's configuration editing facility.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsEditor: Send + Sync {
    /// # Errors
    ///
    /// Returns an I/O error if the editor could not be launched.
    fn open_settings(&self) -> std::io::Result<()>;
}
