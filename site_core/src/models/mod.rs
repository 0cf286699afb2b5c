//! Content models as the CMS serves them

pub mod blocks;
pub mod content;
pub mod envelope;
pub mod response;

pub use blocks::{Block, MediaBlock, QuoteBlock, RichTextBlock, SliderBlock, UnsupportedBlock};
pub use content::{Article, Author, Category, Feature, Global, Homepage, Image, Seo, Service};
pub use envelope::{Envelope, Meta, Pagination};
pub use response::ApiResponse;
