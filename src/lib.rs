//! # s.id URL Manager
//!
//! Manage s.id short URLs through the remote HTTP API: store the credential
//! pair, create short URLs, list them page by page and rename their slugs.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Records, page views, credentials, messages and ports
//! - **Application Layer** ([`application`]) - List refresh and action dispatch
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client, credential stores,
//!   display surface and settings editor
//! - **API Layer** ([`api`]) - Panel host handlers carrying the display surface channel
//!
//! All state lives in the remote service. The local code validates input,
//! calls the API and pushes display-ready updates to the surface.
//!
//! ## Quick Start
//!
//! ```bash
//! # Store the credential pair
//! cargo run --bin sidctl -- auth
//!
//! # Start the panel host
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Runtime configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::ApiError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{ActionDispatcher, PanelSession};
    pub use crate::domain::entities::{Credentials, PageView, ShortUrlRecord};
    pub use crate::domain::messages::{ActionMessage, OutboundMessage};
    pub use crate::domain::ports::{ConfigScope, CredentialStore, ShortUrlApi};
    pub use crate::error::{ApiError, ErrorKind};
    pub use crate::state::AppState;
}
