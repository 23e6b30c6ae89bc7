//! Remote API client over HTTP.

pub mod envelope;
pub mod sid_client;

pub use sid_client::{DEFAULT_BASE_URL, SidApiClient};
