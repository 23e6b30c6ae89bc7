//! Utility functions shared by the client and the dispatcher.
//!
//! - [`url_validation`] - Long URL and slug preconditions

pub mod url_validation;
