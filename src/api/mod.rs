//! Panel host API: the display surface boundary carried over HTTP.
//!
//! # Modules
//!
//! - [`dto`] - Response envelopes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
