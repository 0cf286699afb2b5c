//! Headless CMS access: query encoding, the HTTP client and media URLs

pub mod client;
pub mod media;
pub mod query;

pub use client::CmsClient;
pub use media::{resolve_media_url, MediaResolver};
pub use query::{ContentQuery, Filter, FilterOperator, PageRequest, PublicationStatus, POPULATE_ALL};
