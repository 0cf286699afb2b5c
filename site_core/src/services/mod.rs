//! Typed content accessors over the CMS client

pub mod content_service;

pub use content_service::{queries, ContentService, ContentSource, DEFAULT_PAGE_SIZE};
