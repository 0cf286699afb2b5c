//! Fallback-aware page rendering

pub mod fallback;
pub mod homepage;
pub mod views;

pub use homepage::{load_homepage, merge_collection, merge_entry, ContentOrigin, ContentOrigins, HomepageContent};
pub use views::{ArticleCard, ArticleListView, ArticleView, BlockView, FeatureCard, HomePageView, ServiceCard};

use crate::services::ContentSource;

/// Loads homepage content and maps it to its page model. Never fails.
pub async fn render_homepage(source: &dyn ContentSource) -> HomePageView {
    let content = load_homepage(source).await;
    HomePageView::from_content(&content, source.media())
}
