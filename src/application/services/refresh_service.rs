//! List refresh: one page of records plus the total count.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{Credentials, PageView};
use crate::domain::ports::ShortUrlApi;
use crate::error::ApiError;

/// Builds [`PageView`]s from the remote service.
pub struct RefreshService<A: ShortUrlApi> {
    api: Arc<A>,
}

impl<A: ShortUrlApi> RefreshService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Fetches `page` and the total count concurrently and combines them.
    ///
    /// Both requests use the same credential pair. Nothing is returned until
    /// both complete.
    ///
    /// # Errors
    ///
    /// Fails as a unit with the first error either request reports; no
    /// partial view is produced.
    pub async fn refresh(&self, credentials: &Credentials, page: u32) -> Result<PageView, ApiError> {
        debug!(page, "Refreshing URL list");
        let (urls, total_count) = tokio::try_join!(
            self.api.list_page(credentials, page),
            self.api.count_total(credentials),
        )?;

        let view = PageView::new(urls, page, total_count);
        debug!(
            page,
            total_count,
            total_pages = view.pagination.total_pages,
            records = view.urls.len(),
            "URL list refreshed"
        );
        Ok(view)
    }
}
