//! Domain layer containing entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Short URL records, page views and credentials
//! - [`messages`] - Inbound actions and outbound surface updates
//! - [`ports`] - Traits for the remote API and the host-provided capabilities
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Host capabilities (credential store, display surface, settings editor) are
//!   injected through [`ports`] traits instead of referenced as globals
//! - Orchestration lives in [`crate::application`]

pub mod entities;
pub mod messages;
pub mod ports;
