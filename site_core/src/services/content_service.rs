use async_trait::async_trait;
use tracing::debug;

use crate::{
    cms::{CmsClient, ContentQuery, MediaResolver, PublicationStatus},
    error::Result,
    models::{Article, Category, Envelope, Feature, Global, Homepage, Service},
};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Where pages get their content from. [`ContentService`] talks to the CMS;
/// tests substitute their own.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn articles(&self, page: u32, page_size: u32) -> Result<Envelope<Vec<Article>>>;
    async fn article_by_slug(&self, slug: &str, preview: bool) -> Result<Option<Article>>;
    async fn categories(&self) -> Result<Envelope<Vec<Category>>>;
    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>>;
    async fn global(&self) -> Result<Envelope<Option<Global>>>;
    async fn homepage(&self) -> Result<Envelope<Option<Homepage>>>;
    async fn services(&self) -> Result<Envelope<Vec<Service>>>;
    async fn service_by_slug(&self, slug: &str) -> Result<Option<Service>>;
    async fn features(&self) -> Result<Envelope<Vec<Feature>>>;
    fn media(&self) -> &MediaResolver;
}

pub mod queries {
    use super::*;

    pub fn articles(page: u32, page_size: u32) -> ContentQuery {
        ContentQuery::new()
            .populate_all()
            .with_sort("createdAt:desc")
            .with_pagination(page, page_size)
    }

    pub fn article_by_slug(slug: &str, preview: bool) -> ContentQuery {
        let status = if preview {
            PublicationStatus::Draft
        } else {
            PublicationStatus::Published
        };
        ContentQuery::new()
            .with_eq("slug", slug)
            .populate_all()
            .with_status(status)
    }

    pub fn categories() -> ContentQuery {
        ContentQuery::new().populate_all()
    }

    pub fn by_slug(slug: &str) -> ContentQuery {
        ContentQuery::new().with_eq("slug", slug).populate_all()
    }

    pub fn single() -> ContentQuery {
        ContentQuery::new().populate_all()
    }

    pub fn ordered() -> ContentQuery {
        ContentQuery::new().populate_all().with_sort("order:asc")
    }
}

#[derive(Clone)]
pub struct ContentService {
    client: CmsClient,
}

impl ContentService {
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for ContentService {
    async fn articles(&self, page: u32, page_size: u32) -> Result<Envelope<Vec<Article>>> {
        self.client
            .fetch_collection("/articles", &queries::articles(page, page_size))
            .await
    }

    async fn article_by_slug(&self, slug: &str, preview: bool) -> Result<Option<Article>> {
        let article = self
            .client
            .fetch_first::<Article>("/articles", &queries::article_by_slug(slug, preview))
            .await?;
        if article.is_none() {
            debug!(slug, preview, "No article matched slug");
        }
        Ok(article)
    }

    async fn categories(&self) -> Result<Envelope<Vec<Category>>> {
        self.client
            .fetch_collection("/categories", &queries::categories())
            .await
    }

    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        self.client
            .fetch_first("/categories", &queries::by_slug(slug))
            .await
    }

    async fn global(&self) -> Result<Envelope<Option<Global>>> {
        self.client.fetch_entry("/global", &queries::single()).await
    }

    async fn homepage(&self) -> Result<Envelope<Option<Homepage>>> {
        self.client.fetch_entry("/homepage", &queries::single()).await
    }

    async fn services(&self) -> Result<Envelope<Vec<Service>>> {
        self.client.fetch_collection("/services", &queries::ordered()).await
    }

    async fn service_by_slug(&self, slug: &str) -> Result<Option<Service>> {
        self.client
            .fetch_first("/services", &queries::by_slug(slug))
            .await
    }

    async fn features(&self) -> Result<Envelope<Vec<Feature>>> {
        self.client.fetch_collection("/features", &queries::ordered()).await
    }

    fn media(&self) -> &MediaResolver {
        self.client.media()
    }
}
