//! Middleware components for the site server

pub mod logging;
pub mod revalidate;
