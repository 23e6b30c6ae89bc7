//! One page of short URL records plus pagination metadata.

use serde::Serialize;

use super::ShortUrlRecord;

/// Number of records the remote service returns per page.
pub const PAGE_SIZE: u64 = 10;

/// A window of up to [`PAGE_SIZE`] records for a 1-based page index.
///
/// Rebuilt on every refresh and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub urls: Vec<ShortUrlRecord>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u64,
}

impl PageView {
    pub fn new(urls: Vec<ShortUrlRecord>, current_page: u32, total_count: u64) -> Self {
        Self {
            urls,
            pagination: Pagination {
                current_page,
                total_pages: total_pages(total_count),
            },
        }
    }
}

/// `ceil(total_count / PAGE_SIZE)`, never less than one page.
///
/// An empty account still renders a single (empty) page 1.
pub fn total_pages(total_count: u64) -> u64 {
    total_count.div_ceil(PAGE_SIZE).max(1)
}
