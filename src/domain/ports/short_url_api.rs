//! Contract for the remote short URL service.

use crate::domain::entities::{Credentials, ShortUrlRecord};
use crate::error::ApiError;
use async_trait::async_trait;

/// Authenticated operations against the remote short URL service.
///
/// Implementations hold no mutable state; every call is a single attempt.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::SidApiClient`] - HTTP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlApi: Send + Sync {
    /// Lists one page of records (1-indexed).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`], [`ApiError::Auth`], or
    /// [`ApiError::Protocol`] when the response has no `data` array.
    async fn list_page(
        &self,
        credentials: &Credentials,
        page: u32,
    ) -> Result<Vec<ShortUrlRecord>, ApiError>;

    /// Counts all records owned by the credential pair.
    ///
    /// # Errors
    ///
    /// Same kinds as [`ShortUrlApi::list_page`]; [`ApiError::Protocol`] when
    /// `total` is missing.
    async fn count_total(&self, credentials: &Credentials) -> Result<u64, ApiError>;

    /// Creates a short URL and returns the generated slug.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `long_url` is not an absolute URL
    /// (checked before any request), [`ApiError::RateLimit`] when the service
    /// reports its limit, [`ApiError::Protocol`] when no slug is returned.
    async fn create_short(
        &self,
        credentials: &Credentials,
        long_url: &str,
    ) -> Result<String, ApiError>;

    /// Replaces the slug of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `new_short` is blank,
    /// [`ApiError::RateLimit`] when the rename limit is reached,
    /// [`ApiError::Protocol`] when the success acknowledgement is absent.
    async fn rename_short(
        &self,
        credentials: &Credentials,
        id: &str,
        new_short: &str,
        long_url: &str,
    ) -> Result<(), ApiError>;
}
