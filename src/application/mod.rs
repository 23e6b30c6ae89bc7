//! Application layer orchestrating the remote API and the display surface.
//!
//! # Components
//!
//! - [`services::RefreshService`] - Page + count fan-out/fan-in
//! - [`services::url_count_status`] - Status line text
//! - [`dispatcher::ActionDispatcher`] - Inbound message handling
//! - [`session::PanelSession`] - Dispatcher plus its outbox, for hosts

pub mod dispatcher;
pub mod services;
pub mod session;

pub use dispatcher::ActionDispatcher;
pub use session::PanelSession;
