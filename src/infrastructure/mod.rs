//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Remote API client (`reqwest`)
//! - [`credentials`] - JSON settings file and in-memory credential stores
//! - [`surface`] - Channel-backed display surface
//! - [`settings`] - External editor launcher for the settings file

pub mod credentials;
pub mod http;
pub mod settings;
pub mod surface;
