//! Application configuration

pub mod settings;

pub use settings::{AppConfig, CmsConfig, ServerConfig, DEFAULT_CMS_URL};
