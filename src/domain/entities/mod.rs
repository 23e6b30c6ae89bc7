//! Core domain entities representing the short URL data model.
//!
//! Entities are plain data structures. The remote service is authoritative for
//! records; nothing here is persisted locally.
//!
//! # Entity Types
//!
//! - [`ShortUrlRecord`] - A short URL fetched from the service
//! - [`PageView`] - One page of records plus pagination metadata
//! - [`Credentials`] - The atomic (authId, authKey) pair

pub mod credentials;
pub mod page_view;
pub mod short_url;

pub use credentials::Credentials;
pub use page_view::{PAGE_SIZE, PageView, Pagination, total_pages};
pub use short_url::ShortUrlRecord;
