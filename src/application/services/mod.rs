//! Services orchestrating remote calls.

pub mod refresh_service;
pub mod status_service;

pub use refresh_service::RefreshService;
pub use status_service::url_count_status;
