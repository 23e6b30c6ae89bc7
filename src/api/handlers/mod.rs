//! HTTP request handlers for the panel host.

pub mod panel;
pub mod status;

pub use panel::{message_handler, open_panel_handler};
pub use status::{health_handler, status_handler};
